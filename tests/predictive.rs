use std::{cell::RefCell, path::Path, rc::Rc};

use otter_clause_db::{
    config::Config,
    context::{Context, GenericContext, Snapshot},
    db::{
        arena::record::{Flag, Record},
        ClauseId, ClauseRef,
    },
    predictor::{
        linear::{LinearModel, LinearPredictor},
        Predictor, COLUMNS, COLUMN_NAMES,
    },
    reports::ReduceReport,
    types::err::{self, ErrorKind},
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn glue_column() -> usize {
    COLUMN_NAMES.iter().position(|name| *name == "glue").unwrap()
}

/// A predictor which scores clauses of lower glue as more useful.
fn glue_predictor() -> LinearPredictor {
    let mut weights = [0.0; COLUMNS];
    weights[glue_column()] = -1.0;
    LinearPredictor::from_models(vec![LinearModel::new(weights, 0.0)]).unwrap()
}

fn predictive_config(ml_size: usize, ml_min_age: u64) -> Config {
    let mut config = Config::default();
    config.prediction.use_ml_data.value = true;
    config.prediction.ml_size.value = ml_size;
    config.prediction.ml_min_age.value = ml_min_age;
    config
}

fn live_redundant<P: Predictor>(the_context: &GenericContext<P>) -> Vec<(ClauseRef, u32)> {
    let arena = the_context.clause_db.arena();
    the_context
        .clause_db
        .live_clauses()
        .filter(|reference| arena.clause(*reference).unwrap().is_redundant())
        .map(|reference| (reference, arena.clause(reference).unwrap().glue()))
        .collect()
}

/// Scores by glue, offset by the count of predictions made.
#[derive(Default)]
struct CountingPredictor {
    batch: Vec<f64>,
    rounds: usize,
    scores: Vec<f64>,
}

impl Predictor for CountingPredictor {
    fn setup(&mut self) -> Result<(), err::PredictorError> {
        Ok(())
    }

    fn load_models(&mut self, _paths: &[&Path]) -> Result<(), err::PredictorError> {
        Ok(())
    }

    fn submit_batch(&mut self, matrix: &[f64], _rows: usize) -> Result<(), err::PredictorError> {
        self.batch = matrix.to_vec();
        Ok(())
    }

    fn predict(&mut self, _rows: usize, _context: usize) -> Result<usize, err::PredictorError> {
        self.rounds += 1;
        let offset = 100.0 * self.rounds as f64;
        self.scores = self
            .batch
            .chunks_exact(COLUMNS)
            .map(|row| offset - row[glue_column()])
            .collect();
        Ok(self.scores.len())
    }

    fn score(&self, index: usize) -> Option<f64> {
        self.scores.get(index).copied()
    }

    fn finish(&mut self) {
        self.batch.clear();
    }
}

/// Drops the last row of every batch.
#[derive(Default)]
struct ShortPredictor {
    rows: usize,
    finished: usize,
}

impl Predictor for ShortPredictor {
    fn setup(&mut self) -> Result<(), err::PredictorError> {
        Ok(())
    }

    fn load_models(&mut self, _paths: &[&Path]) -> Result<(), err::PredictorError> {
        Ok(())
    }

    fn submit_batch(&mut self, _matrix: &[f64], rows: usize) -> Result<(), err::PredictorError> {
        self.rows = rows;
        Ok(())
    }

    fn predict(&mut self, _rows: usize, _context: usize) -> Result<usize, err::PredictorError> {
        Ok(self.rows.saturating_sub(1))
    }

    fn score(&self, index: usize) -> Option<f64> {
        (index + 1 < self.rows).then_some(0.0)
    }

    fn finish(&mut self) {
        self.finished += 1;
    }
}

mod side_table {
    use super::*;

    #[test]
    fn rows_follow_clauses() {
        init_logger();

        let mut the_context = GenericContext::from_config_with_predictor(predictive_config(4, 0), glue_predictor());

        assert!(the_context.create_original(vec![1, 2, 3]).is_ok());
        for glue in 1..=10 {
            let atom = glue as i32 + 3;
            assert!(the_context.create_redundant(glue, vec![-1, 2, atom]).is_ok());
        }

        let mut state = Snapshot::with_variables(13);
        assert_eq!(the_context.reduce(&mut state), Ok(ReduceReport::Reduced { deleted: 6 }));

        let live = live_redundant(&the_context);
        assert_eq!(live.iter().map(|(_, glue)| *glue).collect::<Vec<_>>(), vec![1, 2, 3, 4]);

        // Rows of removed clauses remain, as garbage, until the next scan.
        assert_eq!(the_context.clause_db.side_table().len(), 10);

        for (reference, _) in &live {
            let record = the_context.clause_db.arena().clause(*reference).unwrap();
            let index = record.side_table_index().unwrap();
            let row = the_context.clause_db.side_table().row(index).unwrap();
            assert_eq!(row.identity, record.identity());
            assert_eq!(row.clause, *reference);
            assert!(!row.garbage);
        }

        assert_eq!(the_context.reduce(&mut state), Ok(ReduceReport::Reduced { deleted: 0 }));
        assert_eq!(the_context.clause_db.side_table().len(), 4);

        for (index, row) in the_context.clause_db.side_table().rows().iter().enumerate() {
            let record = the_context.clause_db.arena().clause(row.clause).unwrap();
            assert_eq!(record.side_table_index(), Some(index));
            assert_eq!(record.identity(), row.identity);
        }
    }

    #[test]
    fn promoted_clauses_lose_rows() {
        let mut the_context = GenericContext::from_config_with_predictor(predictive_config(10, 0), glue_predictor());

        let a = the_context.create_redundant(3, vec![1, 2, 3]).unwrap().reference().unwrap();
        assert!(the_context.create_redundant(4, vec![1, 2, 4]).is_ok());

        let mut state = Snapshot::with_variables(4);
        assert!(the_context.reduce(&mut state).is_ok());
        assert_eq!(the_context.clause_db.side_table().len(), 2);

        assert!(the_context.clause_db.make_irredundant(a).is_ok());
        assert!(the_context.reduce(&mut state).is_ok());

        assert_eq!(the_context.clause_db.side_table().len(), 1);
        assert_eq!(the_context.clause_db.arena().clause(a).unwrap().side_table_index(), None);
    }

    #[test]
    fn percentile_ranks() {
        let mut the_context = GenericContext::from_config_with_predictor(predictive_config(100, 0), glue_predictor());

        for (index, glue) in [5, 6, 7, 8, 9].into_iter().enumerate() {
            let reference = the_context.create_redundant(glue, vec![1, 2, glue as i32]).unwrap().reference().unwrap();
            // Clauses stored later are used more often.
            for _ in 0..index {
                assert!(the_context.note_propagation(reference).is_ok());
            }
        }

        let mut state = Snapshot::with_variables(9);
        assert_eq!(the_context.reduce(&mut state), Ok(ReduceReport::Reduced { deleted: 0 }));

        let rows = the_context.clause_db.side_table().rows();
        assert_eq!(rows.len(), 5);

        let by_props = rows.iter().map(|row| row.ranks.props).collect::<Vec<_>>();
        assert_eq!(by_props, vec![0.8, 0.6, 0.4, 0.2, 0.0]);

        // With no history every discounted average is zero, and ties follow the order of rows.
        let by_prop = rows.iter().map(|row| row.ranks.prop).collect::<Vec<_>>();
        assert_eq!(by_prop, vec![0.0, 0.2, 0.4, 0.6, 0.8]);

        for row in rows {
            assert!((0.0..1.0).contains(&row.ranks.uips));
        }
    }
}

mod eviction {
    use super::*;

    #[test]
    fn young_clauses_are_retained() {
        let mut config = predictive_config(2, 100);
        config.prediction.ml_reduce_interval.value = 50;
        let mut the_context = GenericContext::from_config_with_predictor(config, CountingPredictor::default());

        for glue in 1..=5 {
            assert!(the_context.create_redundant(glue, vec![1, 2, 2 + glue as i32]).is_ok());
        }

        let mut state = Snapshot::with_variables(7);
        assert_eq!(the_context.reduce(&mut state), Ok(ReduceReport::Reduced { deleted: 0 }));
        assert_eq!(the_context.reduce_limit(), 50);

        for _ in 0..100 {
            the_context.note_conflict();
        }

        assert_eq!(the_context.reduce(&mut state), Ok(ReduceReport::Reduced { deleted: 3 }));
        assert_eq!(the_context.reduce_limit(), 150);

        let live = live_redundant(&the_context);
        assert_eq!(live.iter().map(|(_, glue)| *glue).collect::<Vec<_>>(), vec![1, 2]);

        for (reference, glue) in live {
            let record = the_context.clause_db.arena().clause(reference).unwrap();
            let row = the_context
                .clause_db
                .side_table()
                .row(record.side_table_index().unwrap())
                .unwrap();
            let glue = glue as f64;
            assert_eq!(row.prediction, [200.0 - glue, 100.0 - glue]);
        }
    }

    #[test]
    fn reasons_consume_slots() {
        let mut the_context = GenericContext::from_config_with_predictor(predictive_config(1, 0), glue_predictor());

        let mut references = Vec::new();
        for glue in 1..=3 {
            let reference = the_context.create_redundant(glue, vec![1, 2, 2 + glue as i32]).unwrap().reference().unwrap();
            references.push(reference);
        }

        let mut state = Snapshot::with_variables(5);
        state.reasons = vec![references[2]];

        assert_eq!(the_context.reduce(&mut state), Ok(ReduceReport::Reduced { deleted: 1 }));

        let live = live_redundant(&the_context);
        assert_eq!(live.iter().map(|(_, glue)| *glue).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(state.reasons, vec![live[1].0]);
    }

    #[test]
    fn short_predictions_are_errors() {
        let mut the_context = GenericContext::from_config_with_predictor(predictive_config(0, 0), ShortPredictor::default());

        let mut references = Vec::new();
        for glue in 1..=3 {
            let reference = the_context.create_redundant(glue, vec![1, 2, 2 + glue as i32]).unwrap().reference().unwrap();
            references.push(reference);
        }

        let mut state = Snapshot::with_variables(5);
        state.reasons = vec![references[2]];

        assert_eq!(
            the_context.reduce(&mut state),
            Err(ErrorKind::Predictor(err::PredictorError::RowCount {
                expected: 3,
                found: 2
            }))
        );

        // The batch is finished, the reason is released, and the next reduction is scheduled.
        assert_eq!(the_context.predictor.finished, 1);
        assert!(!the_context.clause_db.arena().clause(references[2]).unwrap().flag(Flag::Reason));
        assert_eq!(the_context.reduce_limit(), 10_000);
        assert_eq!(live_redundant(&the_context).len(), 3);
    }

    #[test]
    fn configured_after_construction() {
        let mut the_context = GenericContext::from_config_with_predictor(Config::default(), glue_predictor());
        the_context.config.prediction.use_ml_data.value = true;
        the_context.config.prediction.ml_size.value = 1;
        the_context.config.prediction.ml_min_age.value = 0;

        for glue in 1..=4 {
            assert!(the_context.create_redundant(glue, vec![1, 2, 2 + glue as i32]).is_ok());
        }

        let mut state = Snapshot::with_variables(6);
        assert_eq!(the_context.reduce(&mut state), Ok(ReduceReport::Reduced { deleted: 3 }));

        let live = live_redundant(&the_context);
        assert_eq!(live.iter().map(|(_, glue)| *glue).collect::<Vec<_>>(), vec![1]);
        assert_eq!(the_context.clause_db.side_table().len(), 4);
        assert_eq!(the_context.reduce_limit(), 10_000);
    }

    #[test]
    fn grace_is_spent() {
        let mut the_context = GenericContext::from_config_with_predictor(predictive_config(10, 0), glue_predictor());

        let a = the_context.create_redundant(3, vec![1, 2, 3]).unwrap().reference().unwrap();
        let b = the_context.create_redundant(8, vec![1, 2, 4]).unwrap().reference().unwrap();
        assert!(the_context.note_used(a).is_ok());
        assert!(the_context.note_used(b).is_ok());

        let mut state = Snapshot::with_variables(4);
        assert!(the_context.reduce(&mut state).is_ok());
        assert_eq!(the_context.clause_db.arena().clause(a).unwrap().used(), 1);
        assert_eq!(the_context.clause_db.arena().clause(b).unwrap().used(), 0);

        assert!(the_context.reduce(&mut state).is_ok());
        assert_eq!(the_context.clause_db.arena().clause(a).unwrap().used(), 0);
    }
}

mod export {
    use super::*;

    #[test]
    fn features_of_each_row() {
        let mut config = Config::default();
        config.prediction.gen_ml_data.value = true;
        config.reduction.reduce_fraction.value = 100;
        let mut the_context = Context::from_config(config);

        let exported = Rc::new(RefCell::new(Vec::new()));
        let callback_exported = exported.clone();
        the_context.set_callback_ml_data(Box::new(move |id: ClauseId, features: &[f64]| {
            callback_exported.borrow_mut().push((id, features.to_vec()));
        }));

        for glue in [1, 5, 9] {
            assert!(the_context.create_redundant(glue, vec![1, 2, glue as i32 + 2]).is_ok());
        }

        let mut state = Snapshot::with_variables(11);

        // The clause of glue 1 is kept, though statistics are collected.
        assert_eq!(the_context.reduce(&mut state), Ok(ReduceReport::Reduced { deleted: 2 }));

        let exported = exported.borrow();
        assert_eq!(exported.len(), 3);
        for (_, features) in exported.iter() {
            assert_eq!(features.len(), COLUMNS);
        }

        let glues = exported
            .iter()
            .map(|(_, features)| features[glue_column()])
            .collect::<Vec<_>>();
        assert_eq!(glues, vec![1.0, 5.0, 9.0]);
        assert_eq!(exported.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
