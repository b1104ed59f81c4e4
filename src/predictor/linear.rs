/*!
A predictor which scores each row by a weighted sum of the features of the row.

A model is read from text, as [COLUMNS] weights followed by a bias, separated by whitespace.
Anything from a `#` to the end of a line is a comment.

```rust
# use otter_clause_db::predictor::linear::LinearModel;
let model = LinearModel::parse("
## ranks
-1 -1 -1 -1
## sums
0.5 0.5
## discounted
0 0 0 0
## glue, age
-0.25 0
## bias
2
").unwrap();

let mut row = [0.0; 12];
row[10] = 4.0;
assert_eq!(model.score(&row), 1.0);
```

Missing features (NaN) contribute nothing to a score.
*/

use std::path::Path;

use crate::{
    misc::log::targets::{self},
    predictor::{Predictor, COLUMNS, MAX_CONTEXTS},
    types::err::{self},
};

/// Weights for each column, and a bias.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearModel {
    weights: [f64; COLUMNS],
    bias: f64,
}

impl LinearModel {
    pub fn new(weights: [f64; COLUMNS], bias: f64) -> Self {
        LinearModel { weights, bias }
    }

    /// Reads a model from text.
    pub fn parse(text: &str) -> Result<Self, err::PredictorError> {
        let mut values = Vec::with_capacity(COLUMNS + 1);
        for line in text.lines() {
            let line = match line.find('#') {
                Some(index) => &line[..index],
                None => line,
            };
            for token in line.split_whitespace() {
                match token.parse::<f64>() {
                    Ok(value) => values.push(value),
                    Err(_) => return Err(err::PredictorError::Model(format!("Not a number: {token}"))),
                }
            }
        }

        if values.len() != COLUMNS + 1 {
            return Err(err::PredictorError::Model(format!(
                "Expected {} values, found {}",
                COLUMNS + 1,
                values.len()
            )));
        }

        let mut weights = [0.0; COLUMNS];
        weights.copy_from_slice(&values[..COLUMNS]);
        Ok(LinearModel {
            weights,
            bias: values[COLUMNS],
        })
    }

    /// The score of a row of features.
    pub fn score(&self, row: &[f64]) -> f64 {
        self.weights
            .iter()
            .zip(row)
            .filter(|(_, feature)| !feature.is_nan())
            .fold(self.bias, |sum, (weight, feature)| sum + weight * feature)
    }
}

/// A predictor of [LinearModel]s.
#[derive(Default)]
pub struct LinearPredictor {
    setup: bool,
    models: Vec<LinearModel>,
    batch: Vec<f64>,
    rows: usize,
    scores: Vec<f64>,
}

impl LinearPredictor {
    /// A predictor with the given models already loaded, one for each context.
    pub fn from_models(models: Vec<LinearModel>) -> Result<Self, err::PredictorError> {
        if models.is_empty() || models.len() > MAX_CONTEXTS {
            return Err(err::PredictorError::ContextIndex(models.len()));
        }
        Ok(LinearPredictor {
            setup: true,
            models,
            ..Default::default()
        })
    }
}

impl Predictor for LinearPredictor {
    fn setup(&mut self) -> Result<(), err::PredictorError> {
        self.setup = true;
        Ok(())
    }

    fn load_models(&mut self, paths: &[&Path]) -> Result<(), err::PredictorError> {
        if !self.setup {
            return Err(err::PredictorError::NotSetup);
        }
        if !self.models.is_empty() {
            return Err(err::PredictorError::ModelsAlreadyLoaded);
        }
        if paths.is_empty() || paths.len() > MAX_CONTEXTS {
            return Err(err::PredictorError::ContextIndex(paths.len()));
        }

        let mut models = Vec::with_capacity(paths.len());
        for path in paths {
            let text = std::fs::read_to_string(path)?;
            models.push(LinearModel::parse(&text)?);
            log::info!(target: targets::PREDICTION, "Loaded model {}", path.display());
        }
        self.models = models;
        Ok(())
    }

    fn submit_batch(&mut self, matrix: &[f64], rows: usize) -> Result<(), err::PredictorError> {
        if self.models.is_empty() {
            return Err(err::PredictorError::ModelsNotLoaded);
        }
        if matrix.len() != rows * COLUMNS {
            return Err(err::PredictorError::ColumnMismatch);
        }
        self.batch.clear();
        self.batch.extend_from_slice(matrix);
        self.rows = rows;
        Ok(())
    }

    fn predict(&mut self, rows: usize, context: usize) -> Result<usize, err::PredictorError> {
        let model = self
            .models
            .get(context)
            .ok_or(err::PredictorError::ContextIndex(context))?;

        if rows != self.rows {
            return Err(err::PredictorError::RowCount {
                expected: rows,
                found: self.rows,
            });
        }

        self.scores = self
            .batch
            .chunks_exact(COLUMNS)
            .map(|row| model.score(row))
            .collect();
        Ok(self.scores.len())
    }

    fn score(&self, index: usize) -> Option<f64> {
        self.scores.get(index).copied()
    }

    fn finish(&mut self) {
        self.batch.clear();
        self.scores.clear();
        self.rows = 0;
    }
}
