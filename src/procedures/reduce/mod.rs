/*!
Reduction of the clause database, by marking some redundant clauses as garbage.

# Overview

A reduction is due when reductions are enabled, some redundant clause exists, and the count of conflicts has reached the limit scheduled by the last reduction (see [reducing](GenericContext::reducing)).

A [reduction](GenericContext::reduce) then:
1. Decides whether to compact the whole arena, by the share of inactive variables.
2. Picks the start of a scan of the arena.
   The whole arena is scanned when compacting, or when extended statistics are collected.
   Otherwise, the scan begins from the first reference at which a reducible clause may be found.
3. [Flushes](crate::context::SolverState::flush) the trail, which may find the formula is unsatisfiable.
4. Flags each long clause which is the reason for some assignment, so the clause is protected.
5. Scans the arena with an [EvictionStrategy], which marks some clauses as garbage.
6. Compacts the arena from the start of the scan.
7. Schedules the next reduction.

# Strategies

Two strategies are available, sharing a single scan of the arena:
- A [static](static_rank) strategy, which ranks candidates by glue and then size, and removes a fixed fraction.
- A [predictive](predictive) strategy, which scores rows of the side table with a [predictor](crate::predictor), and removes all but a fixed count.

The predictive strategy is used when `usemldata` is set.
*/

mod features;
pub use features::feature_row;
pub mod predictive;
mod scan;
pub mod static_rank;

use crate::{
    config::prediction::PredictionConfig,
    context::{ContextState, GenericContext, SolverState},
    db::{
        arena::record::ClauseViewMut,
        clause::ClauseDB,
        ClauseRef,
    },
    misc::log::targets::{self},
    predictor::Predictor,
    reports::ReduceReport,
    types::err::ErrorKind,
};

use predictive::PredictiveEviction;
use static_rank::StaticEviction;

/// A way of choosing which redundant clauses to mark as garbage.
pub trait EvictionStrategy {
    /// Considers a live redundant clause found by a scan, which is not the reason for any assignment.
    fn consider(&mut self, reference: ClauseRef, record: &mut ClauseViewMut<'_>);

    /// Whether some clause is a candidate for removal, after a scan.
    fn has_candidates(&self) -> bool;

    /// Marks the least useful candidates as garbage, and returns the count marked.
    fn evict(&mut self, clause_db: &mut ClauseDB, conflicts: u64) -> Result<usize, ErrorKind>;
}

impl<P: Predictor> GenericContext<P> {
    /// Whether a reduction is due.
    pub fn reducing(&self) -> bool {
        self.config.reduction.reduce.value
            && self.clause_db.counts().redundant > 0
            && self.counters.conflicts >= self.counters.reduce_limit
    }

    /// Whether the share of inactive variables is above the limit for compacting the whole arena.
    fn compacting(&self, state: &impl SolverState) -> bool {
        if !self.config.reduction.compact.value {
            return false;
        }
        let variables = state.variables();
        let inactive = variables.saturating_sub(state.active_variables());
        let limit = variables * self.config.reduction.compact_limit.value as usize / 100;

        log::debug!(target: targets::REDUCTION, "{inactive} inactive variables with limit {limit}");
        inactive > limit
    }

    /// Reduces the clause database.
    ///
    /// On finding the formula is unsatisfiable when flushing the trail, the state of the context is set to unsatisfiable, and the reduction ends early.
    ///
    /// The next reduction is scheduled, and reason flags are cleared, even if the reduction fails.
    pub fn reduce(&mut self, state: &mut impl SolverState) -> Result<ReduceReport, ErrorKind> {
        self.counters.reductions += 1;
        if self.state != ContextState::Unsatisfiable {
            self.state = ContextState::Solving;
        }

        let verbose = self.config.verbose.value;
        if verbose {
            log::info!(target: targets::REDUCTION, "[reduce {}] limit {} hit after {} conflicts", self.counters.reductions, self.counters.reduce_limit, self.counters.conflicts);
        }

        let compact = self.compacting(state);
        let start = match compact || self.config.collecting_statistics() {
            true => ClauseRef::START,
            false => self.clause_db.first_reducible(),
        };

        let outcome = match start.is_valid() {
            true => {
                if verbose {
                    let words = self.clause_db.arena().len().saturating_sub(start.offset());
                    log::info!(target: targets::REDUCTION, "[reduce {}] scanning {words} words after {start}", self.counters.reductions);
                }
                self.reduce_from(start, compact, state)
            }

            false => {
                if verbose {
                    log::info!(target: targets::REDUCTION, "[reduce {}] nothing to reduce", self.counters.reductions);
                }
                Ok(ReduceReport::NothingToReduce)
            }
        };

        self.schedule_reduction();
        self.counters.last_reduce_conflicts = self.counters.conflicts;

        let report = match outcome {
            Ok(report) => report,
            Err(e) => {
                log::error!(target: targets::REDUCTION, "Reduction {} failed: {e}", self.counters.reductions);
                return Err(e);
            }
        };

        log::debug!(target: targets::REDUCTION, "Reduction {}: {report}", self.counters.reductions);
        Ok(report)
    }

    fn reduce_from(
        &mut self,
        start: ClauseRef,
        compact: bool,
        state: &mut impl SolverState,
    ) -> Result<ReduceReport, ErrorKind> {
        if state.flush().is_err() {
            log::info!(target: targets::REDUCTION, "Inconsistency found when flushing the trail");
            self.state = ContextState::Unsatisfiable;
            return Ok(ReduceReport::Unsatisfiable);
        }

        let reasons = state
            .reasons()
            .into_iter()
            .filter(|reason| *reason >= start)
            .collect::<Vec<_>>();
        for reason in &reasons {
            self.clause_db.set_reason(*reason, true)?;
        }

        let outcome = self.evict(start);

        // Reason flags are cleared whether or not eviction succeeded.
        for reason in &reasons {
            self.clause_db.set_reason(*reason, false)?;
        }
        let outcome = outcome?;

        if self.config.verbose.value {
            if let Some(deleted) = outcome {
                let counts = self.clause_db.counts();
                log::info!(target: targets::REDUCTION, "[reduce {}] reduced {deleted} clauses, {} redundant and {} irredundant remain", self.counters.reductions, counts.redundant, counts.irredundant);
            }
        }

        if outcome.is_some() || compact {
            let relocation = self.clause_db.collect(start, &mut self.watch_db)?;
            state.relocate(&relocation);
        }

        match outcome {
            Some(deleted) => Ok(ReduceReport::Reduced { deleted }),
            None => Ok(ReduceReport::NothingToReduce),
        }
    }

    /// Scans from `start` and evicts with the strategy selected by the configuration.
    fn evict(&mut self, start: ClauseRef) -> Result<Option<usize>, ErrorKind> {
        let conflicts = self.counters.conflicts;
        let last_reduction = self.counters.last_reduce_conflicts;
        let prediction = &self.config.prediction;

        match prediction.use_ml_data.value {
            true => {
                let strategy = PredictiveEviction::new(&mut self.predictor, prediction);
                evict_with(&mut self.clause_db, strategy, start, conflicts, last_reduction, prediction)
            }

            false => {
                let strategy = StaticEviction::new(&self.config);
                evict_with(&mut self.clause_db, strategy, start, conflicts, last_reduction, prediction)
            }
        }
    }

    /// Schedules the next reduction.
    ///
    /// The static strategy spaces reductions by the base interval scaled by the square root of the count of reductions.
    /// The predictive strategy spaces reductions by a fixed interval.
    fn schedule_reduction(&mut self) {
        let delta = match self.config.prediction.use_ml_data.value {
            true => self.config.prediction.ml_reduce_interval.value,
            false => {
                let interval = self.config.reduction.reduce_interval.value as f64;
                (interval * (self.counters.reductions as f64).sqrt()) as u64
            }
        };
        self.counters.reduce_limit = self.counters.conflicts.saturating_add(delta);

        log::debug!(target: targets::REDUCTION, "Next reduction at {} conflicts", self.counters.reduce_limit);
    }
}

/// Scans the arena from `start` with `strategy`, maintains the side table, and evicts.
///
/// Returns the count of clauses marked as garbage, or None if no candidate was found.
fn evict_with<S: EvictionStrategy>(
    clause_db: &mut ClauseDB,
    mut strategy: S,
    start: ClauseRef,
    conflicts: u64,
    last_reduction: u64,
    prediction: &PredictionConfig,
) -> Result<Option<usize>, ErrorKind> {
    if !clause_db.scan_reducibles(start, &mut strategy, conflicts, last_reduction, prediction)? {
        log::debug!(target: targets::REDUCTION, "No reducible clause found");
        return Ok(None);
    }

    if prediction.use_ml_data.value || prediction.gen_ml_data.value {
        clause_db.side_table.compact(&mut clause_db.arena)?;
        clause_db.side_table.rank();

        if prediction.gen_ml_data.value {
            clause_db.export_ml_data(conflicts)?;
        }
    }

    let deleted = strategy.evict(clause_db, conflicts)?;
    clause_db.counts.reduced += deleted;
    Ok(Some(deleted))
}
