/// Counts for various things which count, roughly.
///
/// Counts of clauses are kept by the [clause database](crate::db::clause::ClauseDB::counts).
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every conflict noted.
    pub conflicts: u64,

    /// A count of reductions.
    pub reductions: u64,

    /// The count of conflicts at which the next reduction is due.
    pub reduce_limit: u64,

    /// The count of conflicts at the end of the last reduction.
    pub last_reduce_conflicts: u64,
}
