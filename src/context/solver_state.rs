/*!
The boundary between a reduction and the search.

A reduction reads from, and revises, the state of the search through the [SolverState] trait:
- The count of variables, and of active (not eliminated or fixed) variables, decides whether the whole arena is compacted.
- Before a scan, the search flushes the trail (backtracks to the root, propagates, and drops satisfied clauses), which may find the formula is unsatisfiable.
- Long clauses which are reasons for assignments are protected from the reduction.
- After compaction, the search revises any reference it holds.

[Snapshot] is a minimal implementation, for use where no search exists (e.g. when testing).
*/

use crate::db::{clause::collect::Relocation, ClauseRef};

/// The formula was found to be unsatisfiable when flushing the trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Inconsistent;

/// The state of a search, as seen by a reduction.
pub trait SolverState {
    /// The count of variables.
    fn variables(&self) -> usize;

    /// The count of active variables.
    fn active_variables(&self) -> usize;

    /// Backtracks to the root, propagates, and flushes the trail.
    fn flush(&mut self) -> Result<(), Inconsistent>;

    /// Long clauses which are the reason for some assignment.
    fn reasons(&self) -> Vec<ClauseRef>;

    /// Revises references to long clauses after compaction.
    fn relocate(&mut self, relocation: &Relocation);
}

/// A fixed state, with an optional list of reasons.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    /// The count of variables.
    pub variables: usize,

    /// The count of active variables.
    pub active: usize,

    /// Whether flushing finds the formula unsatisfiable.
    pub inconsistent: bool,

    /// Reasons for assignments.
    pub reasons: Vec<ClauseRef>,
}

impl Snapshot {
    /// A snapshot with `variables` variables, all active.
    pub fn with_variables(variables: usize) -> Self {
        Snapshot {
            variables,
            active: variables,
            ..Default::default()
        }
    }
}

impl SolverState for Snapshot {
    fn variables(&self) -> usize {
        self.variables
    }

    fn active_variables(&self) -> usize {
        self.active
    }

    fn flush(&mut self) -> Result<(), Inconsistent> {
        match self.inconsistent {
            true => Err(Inconsistent),
            false => Ok(()),
        }
    }

    fn reasons(&self) -> Vec<ClauseRef> {
        self.reasons.clone()
    }

    fn relocate(&mut self, relocation: &Relocation) {
        self.reasons = self
            .reasons
            .iter()
            .filter_map(|reason| relocation.get(*reason))
            .collect();
    }
}
