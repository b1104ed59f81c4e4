//! Configuration of reductions of the clause database.

use crate::context::ContextState;

use super::{ConfigOption, Percentage};

/// Configuration of when and how much to reduce.
#[derive(Clone, Debug)]
pub struct ReductionConfig {
    /// Permit (scheduled) reductions.
    pub reduce: ConfigOption<bool>,

    /// The percentage of candidates for reduction which are removed by a reduction with the static strategy.
    pub reduce_fraction: ConfigOption<Percentage>,

    /// The count of conflicts before the first reduction.
    pub reduce_init: ConfigOption<u64>,

    /// The base count of conflicts between reductions, scaled by the square root of the count of reductions.
    pub reduce_interval: ConfigOption<u64>,

    /// Permit compaction of the whole arena when many variables are inactive.
    pub compact: ConfigOption<bool>,

    /// The percentage of inactive variables above which the whole arena is compacted.
    pub compact_limit: ConfigOption<Percentage>,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        ReductionConfig {
            reduce: ConfigOption {
                name: "reduce",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: true,
            },

            reduce_fraction: ConfigOption {
                name: "reducefraction",
                min: 10,
                max: 100,
                max_state: ContextState::Configuration,
                value: 75,
            },

            reduce_init: ConfigOption {
                name: "reduceinit",
                min: 0,
                max: 100_000,
                max_state: ContextState::Configuration,
                value: 1_000,
            },

            reduce_interval: ConfigOption {
                name: "reduceint",
                min: 10,
                max: 100_000,
                max_state: ContextState::Configuration,
                value: 1_000,
            },

            compact: ConfigOption {
                name: "compact",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: true,
            },

            compact_limit: ConfigOption {
                name: "compactlim",
                min: 0,
                max: 100,
                max_state: ContextState::Configuration,
                value: 10,
            },
        }
    }
}
