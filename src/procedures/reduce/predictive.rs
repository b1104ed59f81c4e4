/*!
The predictive strategy of reduction, by scores from a [predictor](crate::predictor).

Every live redundant clause has a row in the side table, and the whole table is scored in a single batch.
Rows are then sorted best first by score, and each row past the first `mlsize` rows is a slot for deletion.

Slots are visited worst first.
The clause of a slot is marked as garbage unless the clause is:
- The reason for some assignment.
- Younger than `mlminage` conflicts, as measured from the first scan of the clause.

In either case the clause is retained, though the slot is still consumed.
So, a reduction may leave more than `mlsize` redundant clauses.

The two most recent scores of a row are kept, and a failure of the predictor ends the reduction with an error.

Grace from use is spent on each scan, as with the static strategy, though grace does not protect a clause from deletion.
*/

use crate::{
    config::prediction::PredictionConfig,
    db::{
        arena::record::{ClauseViewMut, Flag, Record},
        clause::ClauseDB,
        ClauseRef,
    },
    misc::log::targets::{self},
    predictor::Predictor,
    types::err::{self, ErrorKind},
};

use super::{features::feature_matrix, EvictionStrategy};

/// Eviction by the scores of `predictor`.
pub struct PredictiveEviction<'p, P: Predictor> {
    predictor: &'p mut P,
    retain: usize,
    min_age: u64,
    context: usize,
    considered: usize,
}

impl<'p, P: Predictor> PredictiveEviction<'p, P> {
    pub fn new(predictor: &'p mut P, config: &PredictionConfig) -> Self {
        PredictiveEviction {
            predictor,
            retain: config.ml_size.value,
            min_age: config.ml_min_age.value,
            context: config.ml_context.value,
            considered: 0,
        }
    }

    /// Scores every row of the side table, shifting the cache of predictions of each row.
    fn score_rows(&mut self, clause_db: &mut ClauseDB, conflicts: u64) -> Result<(), ErrorKind> {
        let rows = clause_db.side_table.len();
        let matrix = feature_matrix(clause_db, conflicts)?;

        let scores = self.predict_batch(&matrix, rows);
        self.predictor.finish();

        for (row, score) in clause_db.side_table.rows_mut().iter_mut().zip(scores?) {
            row.prediction[1] = row.prediction[0];
            row.prediction[0] = score;
        }

        Ok(())
    }

    /// Submits `matrix` and reads back one score for each of the `rows` rows.
    ///
    /// The batch is left for the caller to release, on success or failure.
    fn predict_batch(&mut self, matrix: &[f64], rows: usize) -> Result<Vec<f64>, err::PredictorError> {
        self.predictor.submit_batch(matrix, rows)?;

        let scored = self.predictor.predict(rows, self.context)?;
        if scored != rows {
            log::error!(target: targets::PREDICTION, "{scored} scores for {rows} rows");
            return Err(err::PredictorError::RowCount {
                expected: rows,
                found: scored,
            });
        }

        (0..rows)
            .map(|index| {
                self.predictor.score(index).ok_or(err::PredictorError::RowCount {
                    expected: rows,
                    found: index,
                })
            })
            .collect()
    }
}

impl<P: Predictor> EvictionStrategy for PredictiveEviction<'_, P> {
    fn consider(&mut self, _reference: ClauseRef, record: &mut ClauseViewMut<'_>) {
        let used = record.used();
        if used > 0 {
            record.set_used(used - 1);
        }
        self.considered += 1;
    }

    fn has_candidates(&self) -> bool {
        self.considered > 0
    }

    fn evict(&mut self, clause_db: &mut ClauseDB, conflicts: u64) -> Result<usize, ErrorKind> {
        let rows = clause_db.side_table.len();
        if rows <= self.retain {
            log::debug!(target: targets::PREDICTION, "{rows} rows within the retention of {}", self.retain);
            return Ok(0);
        }

        self.score_rows(clause_db, conflicts)?;

        let table = clause_db.side_table.rows();
        let mut order = (0..rows).collect::<Vec<_>>();
        order.sort_by(|a, b| table[*b].prediction[0].total_cmp(&table[*a].prediction[0]));

        let excess = rows - self.retain;
        let mut deletions = Vec::with_capacity(excess);
        let mut retained = 0;

        for index in order.into_iter().rev().take(excess) {
            let row = &table[index];
            let record = clause_db.arena.clause(row.clause)?;

            if record.flag(Flag::Reason) || conflicts.saturating_sub(row.born) < self.min_age {
                retained += 1;
                continue;
            }

            log::trace!(target: targets::PREDICTION, "Deleting {row}");
            deletions.push(row.clause);
        }

        log::debug!(target: targets::PREDICTION, "Deleting {} of {rows} rows, retaining {retained} in excess", deletions.len());

        for reference in &deletions {
            clause_db.mark_garbage(*reference)?;
        }

        Ok(deletions.len())
    }
}
