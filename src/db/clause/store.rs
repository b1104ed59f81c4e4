use crate::{
    config::{Config, Glue},
    db::{
        arena::record::{Flag, Record, MAX_SIZE},
        watches::WatchDB,
        ClauseId, ClauseRef,
    },
    misc::log::targets::{self},
    structures::{
        clause::{Clause, ClauseSource},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

use super::ClauseDB;

/// Where a stored clause was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseAdded {
    /// A binary clause, stored only in watch lists.
    Binary(ClauseId),

    /// A long clause, stored in the arena.
    Long(ClauseRef, ClauseId),
}

impl ClauseAdded {
    /// The identity of the clause.
    pub fn identity(&self) -> ClauseId {
        match self {
            Self::Binary(identity) | Self::Long(_, identity) => *identity,
        }
    }

    /// The reference to the clause, if long.
    pub fn reference(&self) -> Option<ClauseRef> {
        match self {
            Self::Binary(_) => None,
            Self::Long(reference, _) => Some(*reference),
        }
    }
}

/// Methods for storing clauses.
impl ClauseDB {
    /// Stores a clause with an automatically generated identity.
    ///
    /// Any instance of storing a clause should use this method, as it maintains counts, occurrences, cached references, watches, etc.
    ///
    /// - Empty and unit clauses are rejected, as are clauses containing some literal twice or some literal and its negation.
    /// - The integer `0` is not a literal, and a clause containing `0` is rejected.
    /// - Original clauses are sorted.
    ///   Otherwise, the order of literals is preserved, and the first two literals are watched.
    /// - `glue` is ignored unless the clause is redundant.
    /// - `conflicts` is the count of conflicts at the time the clause is stored.
    /// - Whether a redundant clause is kept is read from `config`.
    pub fn store(
        &mut self,
        clause: impl Clause,
        source: ClauseSource,
        glue: Glue,
        conflicts: u64,
        config: &Config,
        watches: &mut WatchDB,
    ) -> Result<ClauseAdded, err::ClauseDBError> {
        let mut clause = clause.canonical();

        match clause.len() {
            0 => return Err(err::ClauseDBError::EmptyClause),
            1 => return Err(err::ClauseDBError::UnitClause),
            size if size > MAX_SIZE => return Err(err::ClauseDBError::TooLarge),
            _ => {}
        }

        Self::check_literals(&clause)?;

        if source == ClauseSource::Original {
            clause.sort_unstable_by_key(|literal| literal.index());
        }

        match clause.len() {
            2 => self.store_binary(clause, source, watches),
            _ => {
                let keep = match source {
                    ClauseSource::Redundant => {
                        glue <= config.clause_db.tier1.value && !config.prediction.use_ml_data.value
                    }
                    ClauseSource::Original | ClauseSource::Irredundant => true,
                };
                self.store_long(clause, source, glue, keep, conflicts, watches)
            }
        }
    }

    /// Rejects a clause with a repeated literal, some literal and its negation, or `0`.
    fn check_literals(clause: &[CLiteral]) -> Result<(), err::ClauseDBError> {
        if clause.iter().any(|literal| literal.atom() == 0) {
            return Err(err::ClauseDBError::ZeroLiteral);
        }

        let mut sorted = clause.to_vec();
        sorted.sort_unstable_by_key(|literal| literal.index());

        for pair in sorted.windows(2) {
            if pair[0] == pair[1] {
                return Err(err::ClauseDBError::DuplicateLiteral);
            }
            if pair[0].atom() == pair[1].atom() {
                return Err(err::ClauseDBError::Tautology);
            }
        }
        Ok(())
    }

    fn note_stored(&mut self, source: ClauseSource) {
        self.counts.added += 1;
        match source {
            ClauseSource::Redundant => self.counts.redundant += 1,
            ClauseSource::Original => {
                self.counts.irredundant += 1;
                self.counts.original += 1;
            }
            ClauseSource::Irredundant => self.counts.irredundant += 1,
        }
    }

    fn dispatch_stored(&mut self, identity: ClauseId, clause: &[CLiteral], source: ClauseSource) {
        match source {
            ClauseSource::Original => self.make_callback_original(identity, clause),
            ClauseSource::Irredundant | ClauseSource::Redundant => {
                self.make_callback_addition(identity, clause, source)
            }
        }
    }

    fn store_binary(
        &mut self,
        clause: Vec<CLiteral>,
        source: ClauseSource,
        watches: &mut WatchDB,
    ) -> Result<ClauseAdded, err::ClauseDBError> {
        let identity = self.fresh_identity()?;
        let redundant = source == ClauseSource::Redundant;

        watches.watch_binary(clause[0], clause[1], redundant, identity);

        if !redundant {
            self.occurrences.mark_added(&clause);
        }
        self.note_stored(source);

        log::trace!(target: targets::CLAUSE_DB, "#{identity} ({source}): {}", clause.as_dimacs(false));
        self.dispatch_stored(identity, &clause, source);

        Ok(ClauseAdded::Binary(identity))
    }

    fn store_long(
        &mut self,
        clause: Vec<CLiteral>,
        source: ClauseSource,
        glue: Glue,
        keep: bool,
        conflicts: u64,
        watches: &mut WatchDB,
    ) -> Result<ClauseAdded, err::ClauseDBError> {
        let identity = self.fresh_identity()?;
        let redundant = source == ClauseSource::Redundant;

        let glue = match redundant {
            true => glue,
            false => 0,
        };

        let reference = self.arena.allocate(clause.len())?;
        let mut record = self.arena.clause_mut(reference)?;

        record.write_literals(&clause);
        record.set_glue(glue);
        record.set_flag(Flag::Keep, keep);
        record.set_flag(Flag::Redundant, redundant);
        record.set_identity(identity);
        record.set_side_table_index(None);
        record.set_last_touched(conflicts);

        match watches.is_watching() {
            true => watches.watch_long(reference, clause[0], clause[1]),
            false => watches.queue_pending(reference),
        }

        match redundant {
            true => {
                if !keep && !self.first_reducible.is_valid() {
                    self.first_reducible = reference;
                }
            }
            false => {
                self.occurrences.mark_added(&clause);
                self.last_irredundant = reference;
            }
        }
        self.note_stored(source);

        log::trace!(target: targets::CLAUSE_DB, "#{identity} {reference} ({source}, glue {glue}): {}", clause.as_dimacs(false));
        self.dispatch_stored(identity, &clause, source);

        Ok(ClauseAdded::Long(reference, identity))
    }

    /// Watches every long clause stored while the watch database was not watching, and resumes watching.
    pub fn connect_pending(&mut self, watches: &mut WatchDB) -> Result<(), err::ClauseDBError> {
        let pending = watches.take_pending();
        log::debug!(target: targets::WATCHES, "Connecting {} pending clauses", pending.len());

        for reference in pending {
            let clause = self.arena.clause(reference)?;
            if clause.is_garbage() {
                continue;
            }
            let mut literals = clause.literals();
            match (literals.next(), literals.next()) {
                (Some(a), Some(b)) => watches.watch_long(reference, a, b),
                _ => return Err(err::ClauseDBError::Missing),
            }
        }

        watches.set_watching(true);
        Ok(())
    }
}
