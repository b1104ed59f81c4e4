//! Configuration of the collection of extended statistics and of predictive reduction.

use crate::context::ContextState;

use super::ConfigOption;

/// Configuration of the predictive strategy.
#[derive(Clone, Debug)]
pub struct PredictionConfig {
    /// Reduce by the scores of a [predictor](crate::predictor).
    ///
    /// When set, no redundant clause is kept at creation.
    pub use_ml_data: ConfigOption<bool>,

    /// Collect (and export) extended statistics of redundant clauses, while reducing with the static strategy.
    pub gen_ml_data: ConfigOption<bool>,

    /// The count of redundant clauses retained by a predictive reduction.
    pub ml_size: ConfigOption<usize>,

    /// The count of conflicts between predictive reductions.
    pub ml_reduce_interval: ConfigOption<u64>,

    /// The count of conflicts a redundant clause must have been observed for before it may be removed by a predictive reduction.
    pub ml_min_age: ConfigOption<u64>,

    /// The scoring context of the predictor used to score clauses.
    pub ml_context: ConfigOption<usize>,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        PredictionConfig {
            use_ml_data: ConfigOption {
                name: "usemldata",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: false,
            },

            gen_ml_data: ConfigOption {
                name: "genmldata",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: false,
            },

            ml_size: ConfigOption {
                name: "mlsize",
                min: 0,
                max: usize::MAX,
                max_state: ContextState::Configuration,
                value: 10_000,
            },

            ml_reduce_interval: ConfigOption {
                name: "mlreduceint",
                min: 1,
                max: u64::MAX,
                max_state: ContextState::Configuration,
                value: 10_000,
            },

            ml_min_age: ConfigOption {
                name: "mlminage",
                min: 0,
                max: u64::MAX,
                max_state: ContextState::Configuration,
                value: 5_000,
            },

            ml_context: ConfigOption {
                name: "mlcontext",
                min: 0,
                max: crate::predictor::MAX_CONTEXTS - 1,
                max_state: ContextState::Configuration,
                value: 0,
            },
        }
    }
}
