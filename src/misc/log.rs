/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [arena](crate::db::arena)
    pub const ARENA: &str = "arena";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [compaction](crate::db::clause::collect)
    pub const COLLECT: &str = "collect";

    /// Logs related to the [predictor boundary](crate::predictor)
    pub const PREDICTION: &str = "prediction";

    /// Logs related to clause deletion
    pub const REDUCTION: &str = "reduction";

    /// Logs related to the [side table](crate::db::clause::side_table) of extended statistics
    pub const SIDE_TABLE: &str = "side_table";

    /// Logs related to [watch lists](crate::db::watches)
    pub const WATCHES: &str = "watches";
}
