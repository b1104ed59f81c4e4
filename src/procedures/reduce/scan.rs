//! The scan of the arena shared by each strategy of reduction.

use crate::{
    config::prediction::PredictionConfig,
    db::{
        arena::record::{Flag, Record},
        clause::ClauseDB,
        ClauseRef,
    },
    misc::log::targets::{self},
    types::err::ErrorKind,
};

use super::EvictionStrategy;

impl ClauseDB {
    /// Scans the arena from `start`, passing each live redundant clause which is not a reason to `strategy`.
    ///
    /// Clauses are considered from the first redundant clause at or after `start` which is not kept (or, when generating data, from the first redundant clause).
    /// The first reducible reference is revised to this clause, or cleared if there is no such clause.
    ///
    /// During the scan:
    /// - The row of any clause which is no longer redundant, or is garbage, is marked as garbage.
    /// - The row of each live redundant clause is made or updated, when collecting statistics.
    /// - The counters of use of each live redundant clause are cleared.
    ///
    /// Returns whether the strategy has some candidate after the scan.
    pub(crate) fn scan_reducibles<S: EvictionStrategy>(
        &mut self,
        start: ClauseRef,
        strategy: &mut S,
        conflicts: u64,
        last_reduction: u64,
        prediction: &PredictionConfig,
    ) -> Result<bool, ErrorKind> {
        let generating = prediction.gen_ml_data.value;
        let collecting = prediction.use_ml_data.value || generating;

        if collecting {
            debug_assert!(start == ClauseRef::START);
            self.side_table.mark_unseen();
        }

        let end = self.arena.end();
        let mut reference = start;
        let mut first_reducible = ClauseRef::INVALID;

        while reference < end {
            let next = self.arena.next(reference)?;
            let mut record = self.arena.clause_mut(reference)?;

            if !record.is_redundant() {
                if let Some(index) = record.side_table_index() {
                    self.side_table.mark_garbage(index);
                    record.set_side_table_index(None);
                }
                reference = next;
                continue;
            }

            if !first_reducible.is_valid() {
                match generating || !record.flag(Flag::Keep) {
                    true => first_reducible = reference,
                    false => {
                        reference = next;
                        continue;
                    }
                }
            }

            if record.is_garbage() {
                if let Some(index) = record.side_table_index() {
                    self.side_table.mark_garbage(index);
                }
                reference = next;
                continue;
            }

            if collecting {
                let props_used = record.props_used();
                let uip1_used = record.uip1_used();
                let last_touched = record.last_touched();

                self.side_table
                    .row_for(&mut record, reference, conflicts)?
                    .update(props_used, uip1_used, last_touched, conflicts, last_reduction);
            }

            if !record.flag(Flag::Reason) {
                strategy.consider(reference, &mut record);
            }

            record.reset_usage();
            reference = next;
        }

        if first_reducible != self.first_reducible {
            log::trace!(target: targets::REDUCTION, "First reducible revised from {} to {first_reducible}", self.first_reducible);
        }
        self.first_reducible = first_reducible;

        if !first_reducible.is_valid() {
            log::debug!(target: targets::REDUCTION, "No reducible clause from {start}");
            return Ok(false);
        }

        Ok(strategy.has_candidates())
    }
}
