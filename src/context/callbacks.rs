/*!
Callbacks associated with a context.

For the methods which make callbacks, see the clause database.

# Callback types

Callbacks may be mutable functions.
Still, information passed from the context is non-mutable.
*/

use super::GenericContext;
use crate::{
    db::ClauseId,
    predictor::Predictor,
    structures::{clause::ClauseSource, literal::CLiteral},
};

/// A callback made with a clause and the source of the clause.
pub type CallbackOnClauseSource = dyn FnMut(ClauseId, &[CLiteral], ClauseSource);

/// A callback made with a clause.
pub type CallbackOnClause = dyn FnMut(ClauseId, &[CLiteral]);

/// A callback made with the features of a clause.
pub type CallbackOnFeatures = dyn FnMut(ClauseId, &[f64]);

/// Methods to set callbacks called within the clause database.
impl<P: Predictor> GenericContext<P> {
    pub fn set_callback_original(&mut self, callback: Box<CallbackOnClauseSource>) {
        self.clause_db.set_callback_original(callback);
    }

    pub fn set_callback_addition(&mut self, callback: Box<CallbackOnClauseSource>) {
        self.clause_db.set_callback_addition(callback);
    }

    pub fn set_callback_delete(&mut self, callback: Box<CallbackOnClause>) {
        self.clause_db.set_callback_delete(callback);
    }

    pub fn set_callback_ml_data(&mut self, callback: Box<CallbackOnFeatures>) {
        self.clause_db.set_callback_ml_data(callback);
    }
}
