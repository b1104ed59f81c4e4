//! Notes of the use of long clauses by the search, read by reductions.

use crate::{
    config::dbs::ClauseDBConfig,
    db::{
        arena::record::{Flag, Record},
        ClauseRef,
    },
    types::err::{self},
};

use super::ClauseDB;

impl ClauseDB {
    /// Notes the clause at `reference` propagated some literal.
    pub fn note_propagation(&mut self, reference: ClauseRef, conflicts: u64) -> Result<(), err::ArenaError> {
        let mut record = self.arena.clause_mut(reference)?;
        record.increment_props_used();
        record.set_last_touched(conflicts);
        Ok(())
    }

    /// Notes the clause at `reference` was the reason for the first UIP of some conflict.
    pub fn note_uip(&mut self, reference: ClauseRef, conflicts: u64) -> Result<(), err::ArenaError> {
        let mut record = self.arena.clause_mut(reference)?;
        record.increment_uip1_used();
        record.set_last_touched(conflicts);
        Ok(())
    }

    /// Notes the clause at `reference` was used in the analysis of some conflict.
    ///
    /// A clause with glue within the second tier is given two reductions of grace, and otherwise one.
    pub fn note_used(&mut self, reference: ClauseRef, config: &ClauseDBConfig) -> Result<(), err::ArenaError> {
        let tier2 = config.tier2.value;
        let mut record = self.arena.clause_mut(reference)?;
        let used = 1 + (record.glue() <= tier2) as u8;
        record.set_used(used);
        Ok(())
    }

    /// Sets or clears the reason flag of the clause at `reference`.
    pub fn set_reason(&mut self, reference: ClauseRef, reason: bool) -> Result<(), err::ArenaError> {
        self.arena.clause_mut(reference)?.set_flag(Flag::Reason, reason);
        Ok(())
    }
}
