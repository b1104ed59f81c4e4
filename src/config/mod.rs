/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
The configuration is held by a [context](crate::context), and methods of other structures which depend on some option are given the relevant part of the configuration, e.g. [note_used](crate::db::clause::ClauseDB::note_used) is given the [ClauseDBConfig].

Each option is a [ConfigOption], and so the value of an option is found at `.value`.

```rust
# use otter_clause_db::config::Config;
let mut config = Config::default();
config.clause_db.tier1.value = 3;
assert!(config.reduction.reduce_fraction.set(50));
assert!(!config.reduction.reduce_fraction.set(500));
assert_eq!(config.reduction.reduce_fraction.value, 50);
```
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;
use dbs::ClauseDBConfig;

mod glue;
pub use glue::{Glue, GLUE_BITS, MAX_GLUE};

pub mod prediction;
use prediction::PredictionConfig;

pub mod reduction;
use reduction::ReductionConfig;

use crate::context::ContextState;

/// A percentage, from 0 to 100.
pub type Percentage = u32;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Configuration of the clause database.
    pub clause_db: ClauseDBConfig,

    /// Configuration of (predictive) reduction.
    pub prediction: PredictionConfig,

    /// Configuration of reduction.
    pub reduction: ReductionConfig,

    /// Report the phases of each reduction.
    pub verbose: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            clause_db: ClauseDBConfig::default(),
            prediction: PredictionConfig::default(),
            reduction: ReductionConfig::default(),

            verbose: ConfigOption {
                name: "verbose",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: false,
            },
        }
    }
}

impl Config {
    /// Whether extended statistics are collected for redundant clauses.
    pub fn collecting_statistics(&self) -> bool {
        self.prediction.use_ml_data.value || self.prediction.gen_ml_data.value
    }
}
