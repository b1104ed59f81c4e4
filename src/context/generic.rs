use crate::{
    config::{Config, Glue},
    db::{
        clause::{collect::Relocation, ClauseAdded, ClauseDB},
        watches::WatchDB,
        ClauseRef,
    },
    predictor::Predictor,
    structures::clause::{Clause, ClauseSource},
    types::err::ErrorKind,
};

use super::{ContextState, Counters};

/// A generic context, parameterised to a [predictor](crate::predictor).
///
/// # Example
///
/// ```rust
/// # use otter_clause_db::context::GenericContext;
/// # use otter_clause_db::predictor::linear::LinearPredictor;
/// # use otter_clause_db::config::Config;
/// let context = GenericContext::from_config_with_predictor(Config::default(), LinearPredictor::default());
/// ```
pub struct GenericContext<P: Predictor> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context.
    pub counters: Counters,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// Watch lists for each literal.
    /// See [db::watches](crate::db::watches) for details.
    pub watch_db: WatchDB,

    /// The predictor used to score clauses when reducing by prediction.
    pub predictor: P,

    /// The status of the context.
    pub state: ContextState,
}

impl<P: Predictor> GenericContext<P> {
    /// Creates a context from some given configuration and predictor.
    pub fn from_config_with_predictor(config: Config, predictor: P) -> Self {
        let counters = Counters {
            reduce_limit: config.reduction.reduce_init.value,
            ..Counters::default()
        };

        Self {
            clause_db: ClauseDB::new(),
            watch_db: WatchDB::default(),

            config,
            counters,
            predictor,

            state: ContextState::Configuration,
        }
    }

    /// Stores an original clause.
    pub fn create_original(&mut self, clause: impl Clause) -> Result<ClauseAdded, ErrorKind> {
        self.create(clause, ClauseSource::Original, 0)
    }

    /// Stores an irredundant clause, which is not original.
    pub fn create_irredundant(&mut self, clause: impl Clause) -> Result<ClauseAdded, ErrorKind> {
        self.create(clause, ClauseSource::Irredundant, 0)
    }

    /// Stores a redundant clause, with the given glue.
    pub fn create_redundant(&mut self, glue: Glue, clause: impl Clause) -> Result<ClauseAdded, ErrorKind> {
        self.create(clause, ClauseSource::Redundant, glue)
    }

    fn create(&mut self, clause: impl Clause, source: ClauseSource, glue: Glue) -> Result<ClauseAdded, ErrorKind> {
        if self.state == ContextState::Configuration {
            self.state = ContextState::Input;
        }

        let added = self.clause_db.store(
            clause,
            source,
            glue,
            self.counters.conflicts,
            &self.config,
            &mut self.watch_db,
        )?;
        Ok(added)
    }

    /// Notes a conflict.
    pub fn note_conflict(&mut self) {
        self.counters.conflicts += 1;
    }

    /// Notes the long clause at `reference` propagated some literal.
    pub fn note_propagation(&mut self, reference: ClauseRef) -> Result<(), ErrorKind> {
        Ok(self.clause_db.note_propagation(reference, self.counters.conflicts)?)
    }

    /// Notes the long clause at `reference` was the reason for the first UIP of some conflict.
    pub fn note_uip(&mut self, reference: ClauseRef) -> Result<(), ErrorKind> {
        Ok(self.clause_db.note_uip(reference, self.counters.conflicts)?)
    }

    /// Notes the long clause at `reference` was used in the analysis of some conflict.
    ///
    /// See [note_used](ClauseDB::note_used).
    pub fn note_used(&mut self, reference: ClauseRef) -> Result<(), ErrorKind> {
        Ok(self.clause_db.note_used(reference, &self.config.clause_db)?)
    }

    /// Compacts the arena from `start`.
    ///
    /// See [collect](crate::db::clause::collect) for details.
    pub fn collect(&mut self, start: ClauseRef) -> Result<Relocation, ErrorKind> {
        Ok(self.clause_db.collect(start, &mut self.watch_db)?)
    }

    /// The count of conflicts at which the next reduction is due.
    pub fn reduce_limit(&self) -> u64 {
        self.counters.reduce_limit
    }
}
