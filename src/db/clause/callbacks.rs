use crate::{
    context::callbacks::{CallbackOnClause, CallbackOnClauseSource, CallbackOnFeatures},
    db::ClauseId,
    structures::{clause::ClauseSource, literal::CLiteral},
};

use super::ClauseDB;

impl ClauseDB {
    /// Set a callback to be made when an original clause is added to the context.
    pub fn set_callback_original(&mut self, callback: Box<CallbackOnClauseSource>) {
        self.callback_original = Some(callback);
    }

    /// Set a callback to be made when a non-original clause is added to the context.
    pub fn set_callback_addition(&mut self, callback: Box<CallbackOnClauseSource>) {
        self.callback_addition = Some(callback);
    }

    /// Set a callback to be made when a clause is deleted from the context.
    pub fn set_callback_delete(&mut self, callback: Box<CallbackOnClause>) {
        self.callback_delete = Some(callback);
    }

    /// Set a callback to be made with the features of each redundant clause, when generating data.
    pub fn set_callback_ml_data(&mut self, callback: Box<CallbackOnFeatures>) {
        self.callback_ml_data = Some(callback);
    }
}

impl ClauseDB {
    /// Make the callback to be made when an original clause is added to the context.
    pub fn make_callback_original(&mut self, identity: ClauseId, clause: &[CLiteral]) {
        if let Some(callback) = &mut self.callback_original {
            callback(identity, clause, ClauseSource::Original);
        }
    }

    /// Make the callback set to be made when a non-original clause is added to the context.
    pub fn make_callback_addition(
        &mut self,
        identity: ClauseId,
        clause: &[CLiteral],
        source: ClauseSource,
    ) {
        if let Some(callback) = &mut self.callback_addition {
            callback(identity, clause, source);
        }
    }

    /// Make the callback set to be made when a clause is deleted from the context.
    pub fn make_callback_delete(&mut self, identity: ClauseId, clause: &[CLiteral]) {
        if let Some(callback) = &mut self.callback_delete {
            callback(identity, clause);
        }
    }

    /// Make the callback set to be made with the features of a redundant clause.
    pub fn make_callback_ml_data(&mut self, identity: ClauseId, features: &[f64]) {
        if let Some(callback) = &mut self.callback_ml_data {
            callback(identity, features);
        }
    }

    /// Whether a callback with features has been set.
    pub(crate) fn exporting_ml_data(&self) -> bool {
        self.callback_ml_data.is_some()
    }
}
