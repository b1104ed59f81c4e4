/*!
The boundary with a predictor, used to score redundant clauses when reducing by prediction.

A predictor holds up to [MAX_CONTEXTS] scoring contexts (e.g. models for short, medium, and long horizons).
Use of a predictor follows a fixed protocol:

1. [setup](Predictor::setup), which may be called any number of times.
2. [load_models](Predictor::load_models), exactly once, with one path per context.
3. Any number of rounds of:
   - [submit_batch](Predictor::submit_batch), with a row-major matrix of features.
   - [predict](Predictor::predict), with the count of rows and the index of a context, returning the count of scores made.
   - [score](Predictor::score), for each row.
   - [finish](Predictor::finish), to release the batch.

# Features

The columns of the matrix are fixed by [SCHEMA_VERSION], and listed in [COLUMN_NAMES].
A model loaded by a predictor must have been trained on the same columns, in the same order.
A feature which is missing is given as NaN.

Scores are read with greater values as more useful.
*/

pub mod linear;

use std::path::Path;

use crate::types::err::{self};

/// The greatest count of scoring contexts.
pub const MAX_CONTEXTS: usize = 3;

/// The version of the columns of the feature matrix.
pub const SCHEMA_VERSION: u32 = 1;

/// The count of columns of the feature matrix.
pub const COLUMNS: usize = 12;

/// The names of the columns of the feature matrix, in order.
pub const COLUMN_NAMES: [&str; COLUMNS] = [
    "prop_rank",
    "uip_rank",
    "props_rank",
    "uips_rank",
    "sum_props",
    "sum_uips",
    "disc_props_fast",
    "disc_props_slow",
    "disc_uips_fast",
    "disc_uips_slow",
    "glue",
    "age_since_touch",
];

/// Something which scores rows of features.
pub trait Predictor {
    /// Prepares the scoring contexts.
    fn setup(&mut self) -> Result<(), err::PredictorError>;

    /// Loads a model for each context from `paths`, in order.
    fn load_models(&mut self, paths: &[&Path]) -> Result<(), err::PredictorError>;

    /// Hands over a row-major matrix of `rows` rows of [COLUMNS] features.
    fn submit_batch(&mut self, matrix: &[f64], rows: usize) -> Result<(), err::PredictorError>;

    /// Scores the submitted batch of `rows` rows with the model of `context`, and returns the count of scores made.
    fn predict(&mut self, rows: usize, context: usize) -> Result<usize, err::PredictorError>;

    /// The score of the row at `index` in the last prediction.
    fn score(&self, index: usize) -> Option<f64>;

    /// Releases the batch.
    fn finish(&mut self);
}
