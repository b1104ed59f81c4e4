/*!
Marking clauses as garbage, and other revisions to the logical content of stored clauses.

A long clause marked as garbage is unreachable, though the record of the clause remains in the arena until the next [compaction](super::collect).
Each marking adds the (actual) bytes of the record to the count of garbage bytes, and compaction subtracts the same.

Binary clauses are deleted immediately, as no record of a binary clause exists outside of watch lists.
*/

use crate::{
    db::{
        arena::{
            record::{Flag, Record},
            WORD_BYTES,
        },
        watches::WatchDB,
        ClauseId, ClauseRef,
    },
    misc::log::targets::{self},
    structures::{clause::ClauseSource, literal::CLiteral},
    types::err::{self},
};

use super::ClauseDB;

impl ClauseDB {
    /// Marks the long clause at `reference` as garbage.
    ///
    /// Fails if the clause is already garbage, or is the reason for some assignment.
    ///
    /// For an irredundant clause the occurrences of the literals of the clause are removed.
    /// For a redundant clause with a row in the side table, the row is marked as garbage.
    pub fn mark_garbage(&mut self, reference: ClauseRef) -> Result<(), err::ClauseDBError> {
        let mut record = self.arena.clause_mut(reference)?;

        if record.is_garbage() {
            log::error!(target: targets::CLAUSE_DB, "Garbage {reference} marked as garbage");
            return Err(err::ClauseDBError::AlreadyGarbage);
        }
        if record.flag(Flag::Reason) {
            log::error!(target: targets::CLAUSE_DB, "Reason {reference} marked as garbage");
            return Err(err::ClauseDBError::ReasonClause);
        }

        record.set_flag(Flag::Garbage, true);

        let identity = record.identity();
        let redundant = record.is_redundant();
        let side_index = record.side_table_index();
        let bytes = record.actual_words() * WORD_BYTES;
        let clause = record.to_clause();

        log::trace!(target: targets::CLAUSE_DB, "Garbage {reference} {}", record.as_view());

        match redundant {
            true => {
                if let Some(index) = side_index {
                    self.side_table.mark_garbage(index);
                }
                self.counts.redundant -= 1;
            }
            false => {
                self.occurrences.mark_removed(&clause);
                self.counts.irredundant -= 1;
            }
        }

        self.counts.arena_garbage += bytes;
        self.make_callback_delete(identity, &clause);
        Ok(())
    }

    /// Deletes the binary clause of `a` and `b`.
    pub fn delete_binary(
        &mut self,
        a: CLiteral,
        b: CLiteral,
        redundant: bool,
        identity: ClauseId,
        watches: &mut WatchDB,
    ) -> Result<(), err::ClauseDBError> {
        watches.unwatch_binary(a, b, identity)?;

        log::trace!(target: targets::CLAUSE_DB, "Deleted binary #{identity}: {a} {b}");

        match redundant {
            true => self.counts.redundant -= 1,
            false => {
                self.occurrences.mark_removed(&[a, b]);
                self.counts.irredundant -= 1;
            }
        }
        self.counts.deleted += 1;

        self.make_callback_delete(identity, &[a, b]);
        Ok(())
    }

    /// Shortens the long clause at `reference` to the first `size` literals.
    ///
    /// The shortened clause must remain long, and so `size` must be at least three and less than the current size.
    ///
    /// The shortened clause is passed to the addition callback before the original clause is passed to the deletion callback.
    pub fn shrink(&mut self, reference: ClauseRef, size: usize) -> Result<(), err::ClauseDBError> {
        let mut record = self.arena.clause_mut(reference)?;

        if record.is_garbage() || size < 3 || size >= record.size() {
            return Err(err::ClauseDBError::InvalidShrink);
        }

        let original = record.to_clause();
        record.shrink(size);

        let identity = record.identity();
        let source = match record.is_redundant() {
            true => ClauseSource::Redundant,
            false => ClauseSource::Irredundant,
        };

        log::trace!(target: targets::CLAUSE_DB, "Shrunk #{identity} {reference} from {} to {size}", original.len());

        if source == ClauseSource::Irredundant {
            self.occurrences.mark_removed(&original[size..]);
        }

        self.make_callback_addition(identity, &original[..size], source);
        self.make_callback_delete(identity, &original);
        Ok(())
    }

    /// Promotes the redundant long clause at `reference` to an irredundant clause.
    ///
    /// Any row of the clause in the side table is dropped by the next scan of the arena.
    pub fn make_irredundant(&mut self, reference: ClauseRef) -> Result<(), err::ClauseDBError> {
        let mut record = self.arena.clause_mut(reference)?;

        if record.is_garbage() || !record.is_redundant() {
            return Err(err::ClauseDBError::NotRedundant);
        }

        record.set_flag(Flag::Redundant, false);
        let clause = record.to_clause();

        log::trace!(target: targets::CLAUSE_DB, "Irredundant #{} {reference}", record.identity());

        self.occurrences.mark_added(&clause);
        self.counts.redundant -= 1;
        self.counts.irredundant += 1;

        if !self.last_irredundant.is_valid() || self.last_irredundant < reference {
            self.last_irredundant = reference;
        }
        Ok(())
    }
}
