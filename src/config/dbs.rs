//! Configuration of databases, typically derived from the configuration of a context.

use crate::context::ContextState;

use super::{ConfigOption, Glue, MAX_GLUE};

/// Configuration for the clause database.
#[derive(Clone, Debug)]
pub struct ClauseDBConfig {
    /// Redundant clauses with glue within the bound (glue ≤ bound) are kept at creation.
    /// That is, are never candidates for reduction by the static strategy.
    pub tier1: ConfigOption<Glue>,

    /// Redundant clauses with glue within the bound (glue ≤ bound) which have been used since the last reduction are granted a grace period.
    pub tier2: ConfigOption<Glue>,
}

impl Default for ClauseDBConfig {
    fn default() -> Self {
        ClauseDBConfig {
            tier1: ConfigOption {
                name: "tier1",
                min: 0,
                max: MAX_GLUE,
                max_state: ContextState::Configuration,
                value: 2,
            },

            tier2: ConfigOption {
                name: "tier2",
                min: 0,
                max: MAX_GLUE,
                max_state: ContextState::Configuration,
                value: 6,
            },
        }
    }
}
