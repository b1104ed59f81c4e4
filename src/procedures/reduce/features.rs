//! Rows of features, built from the side table for a predictor or for export.
//!
//! The order of columns is fixed by [COLUMN_NAMES](crate::predictor::COLUMN_NAMES).

use crate::{
    config::Glue,
    db::{arena::record::Record, clause::{side_table::ExtData, ClauseDB}},
    misc::log::targets::{self},
    predictor::COLUMNS,
    types::err::ErrorKind,
};

/// The features of `row`, for a clause with `glue`, after `conflicts` conflicts.
pub fn feature_row(row: &ExtData, glue: Glue, conflicts: u64) -> [f64; COLUMNS] {
    [
        row.ranks.prop,
        row.ranks.uip,
        row.ranks.props,
        row.ranks.uips,
        row.sum_props as f64,
        row.sum_uips as f64,
        row.discounted_props[0],
        row.discounted_props[1],
        row.discounted_uips[0],
        row.discounted_uips[1],
        glue as f64,
        conflicts.saturating_sub(row.last_touched) as f64,
    ]
}

/// The row-major matrix of features of every row of the side table, in the order of rows.
pub(crate) fn feature_matrix(clause_db: &ClauseDB, conflicts: u64) -> Result<Vec<f64>, ErrorKind> {
    let rows = clause_db.side_table.rows();
    let mut matrix = Vec::with_capacity(rows.len() * COLUMNS);

    for row in rows {
        let glue = clause_db.arena.clause(row.clause)?.glue();
        matrix.extend_from_slice(&feature_row(row, glue, conflicts));
    }

    Ok(matrix)
}

impl ClauseDB {
    /// Passes the identity and features of each row of the side table to the callback for features, if set.
    pub(crate) fn export_ml_data(&mut self, conflicts: u64) -> Result<(), ErrorKind> {
        if !self.exporting_ml_data() {
            return Ok(());
        }

        let matrix = feature_matrix(self, conflicts)?;
        let identities = self
            .side_table
            .rows()
            .iter()
            .map(|row| row.identity)
            .collect::<Vec<_>>();

        for (identity, features) in identities.into_iter().zip(matrix.chunks_exact(COLUMNS)) {
            self.make_callback_ml_data(identity, features);
        }

        log::debug!(target: targets::PREDICTION, "Exported features of {} rows", self.side_table.len());
        Ok(())
    }
}
