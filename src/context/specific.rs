use crate::{config::Config, predictor::linear::LinearPredictor};

use super::GenericContext;

/// A context which uses [LinearPredictor] to score clauses.
pub type Context = GenericContext<LinearPredictor>;

impl Context {
    /// Creates a context from some given configuration.
    ///
    /// The predictor is not set up, and no models are loaded.
    /// So, before reducing by prediction, set up the [predictor](GenericContext::predictor) and load models.
    pub fn from_config(config: Config) -> Self {
        Self::from_config_with_predictor(config, LinearPredictor::default())
    }
}
