/*!
Reports for the context.
*/

pub mod proof;

/// The outcome of a reduction.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ReduceReport {
    /// Some count of redundant clauses were marked as garbage, and the arena was compacted.
    Reduced { deleted: usize },

    /// No clause was a candidate for removal.
    NothingToReduce,

    /// The formula was found to be unsatisfiable when flushing the trail.
    Unsatisfiable,
}

impl ReduceReport {
    /// The conventional exit code of the report.
    ///
    /// ```rust
    /// # use otter_clause_db::reports::ReduceReport;
    /// assert_eq!(ReduceReport::Unsatisfiable.code(), 20);
    /// assert_eq!(ReduceReport::NothingToReduce.code(), 0);
    /// ```
    pub fn code(&self) -> i32 {
        match self {
            Self::Unsatisfiable => 20,
            Self::Reduced { .. } | Self::NothingToReduce => 0,
        }
    }
}

impl std::fmt::Display for ReduceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reduced { deleted } => write!(f, "Reduced ({deleted} deleted)"),
            Self::NothingToReduce => write!(f, "Nothing to reduce"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}
