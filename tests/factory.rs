use std::{cell::RefCell, rc::Rc};

use otter_clause_db::{
    config::Config,
    context::Context,
    db::{
        arena::record::{Flag, Record},
        clause::ClauseAdded,
        ClauseId, ClauseRef,
    },
    structures::clause::ClauseSource,
    types::err::{self, ErrorKind},
};

mod identities {
    use super::*;

    #[test]
    fn shared_and_increasing() {
        let mut the_context = Context::from_config(Config::default());

        let identities = [
            the_context.create_original(vec![1, 2, 3]),
            the_context.create_original(vec![-1, 2]),
            the_context.create_redundant(4, vec![-2, 3, 4]),
            the_context.create_irredundant(vec![-3, -4]),
            the_context.create_redundant(9, vec![1, -3, 4, 5]),
        ]
        .into_iter()
        .map(|added| added.unwrap().identity())
        .collect::<Vec<_>>();

        assert_eq!(identities, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn rejections_use_no_identity() {
        let mut the_context = Context::from_config(Config::default());

        assert_eq!(
            the_context.create_original(vec![]),
            Err(ErrorKind::ClauseDB(err::ClauseDBError::EmptyClause))
        );
        assert_eq!(
            the_context.create_original(vec![1]),
            Err(ErrorKind::ClauseDB(err::ClauseDBError::UnitClause))
        );
        assert_eq!(
            the_context.create_redundant(3, vec![1, 2, 1]),
            Err(ErrorKind::ClauseDB(err::ClauseDBError::DuplicateLiteral))
        );
        assert_eq!(
            the_context.create_irredundant(vec![1, 2, -1]),
            Err(ErrorKind::ClauseDB(err::ClauseDBError::Tautology))
        );
        assert_eq!(
            the_context.create_redundant(3, vec![6, 7, 8, 0, 9]),
            Err(ErrorKind::ClauseDB(err::ClauseDBError::ZeroLiteral))
        );

        assert_eq!(the_context.create_original(vec![1, 2]), Ok(ClauseAdded::Binary(1)));
        assert_eq!(the_context.clause_db.counts().added, 1);
    }
}

mod records {
    use super::*;

    fn record_of(the_context: &Context, reference: ClauseRef) -> (u32, bool, bool) {
        let record = the_context.clause_db.arena().clause(reference).unwrap();
        (record.glue(), record.flag(Flag::Keep), record.is_redundant())
    }

    #[test]
    fn keep_by_tier1() {
        let mut config = Config::default();
        config.clause_db.tier1.value = 2;
        let mut the_context = Context::from_config(config);

        let original = the_context.create_original(vec![3, 1, 2]).unwrap().reference().unwrap();
        let low = the_context.create_redundant(2, vec![1, 2, 4]).unwrap().reference().unwrap();
        let high = the_context.create_redundant(3, vec![1, 2, 5]).unwrap().reference().unwrap();

        assert_eq!(record_of(&the_context, original), (0, true, false));
        assert_eq!(record_of(&the_context, low), (2, true, true));
        assert_eq!(record_of(&the_context, high), (3, false, true));

        // Original clauses are sorted, other clauses are not.
        assert_eq!(the_context.clause_db.literals_of(original), Ok(vec![1, 2, 3]));

        assert_eq!(the_context.clause_db.first_reducible(), high);
        assert_eq!(the_context.clause_db.last_irredundant(), original);
    }

    #[test]
    fn no_keep_when_predicting() {
        let mut config = Config::default();
        config.prediction.use_ml_data.value = true;
        let mut the_context = Context::from_config(config);

        let low = the_context.create_redundant(1, vec![1, 2, 4]).unwrap().reference().unwrap();
        let irredundant = the_context.create_irredundant(vec![1, 2, 5]).unwrap().reference().unwrap();

        assert_eq!(record_of(&the_context, low), (1, false, true));
        assert_eq!(record_of(&the_context, irredundant), (0, true, false));
        assert_eq!(the_context.clause_db.first_reducible(), low);
    }

    #[test]
    fn fresh_usage() {
        let mut the_context = Context::from_config(Config::default());
        the_context.note_conflict();
        the_context.note_conflict();

        let reference = the_context.create_redundant(8, vec![1, 2, 3]).unwrap().reference().unwrap();
        let record = the_context.clause_db.arena().clause(reference).unwrap();

        assert_eq!(record.props_used(), 0);
        assert_eq!(record.uip1_used(), 0);
        assert_eq!(record.used(), 0);
        assert_eq!(record.last_touched(), 2);
        assert_eq!(record.side_table_index(), None);
    }

    #[test]
    fn walk_past_shrunken_records() {
        let mut the_context = Context::from_config(Config::default());

        let a = the_context.create_original(vec![1, 2, 3, 4, 5]).unwrap().reference().unwrap();
        assert!(the_context.create_redundant(3, vec![6, 7, 8, 0, 9]).is_err());
        let b = the_context.create_original(vec![10, 11, 12]).unwrap().reference().unwrap();

        assert!(the_context.clause_db.shrink(a, 3).is_ok());

        let arena = the_context.clause_db.arena();
        assert_eq!(arena.references_from(ClauseRef::START).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(arena.clause(b).unwrap().to_clause(), vec![10, 11, 12]);
    }

    #[test]
    fn promotion() {
        let mut the_context = Context::from_config(Config::default());

        let reference = the_context.create_redundant(8, vec![1, 2, 3]).unwrap().reference().unwrap();
        assert_eq!(the_context.clause_db.occurrences().count(1), 0);

        assert!(the_context.clause_db.make_irredundant(reference).is_ok());
        assert_eq!(the_context.clause_db.occurrences().count(1), 1);
        assert_eq!(the_context.clause_db.counts().redundant, 0);
        assert_eq!(the_context.clause_db.counts().irredundant, 1);
        assert_eq!(the_context.clause_db.last_irredundant(), reference);

        assert_eq!(
            the_context.clause_db.make_irredundant(reference),
            Err(err::ClauseDBError::NotRedundant)
        );
    }
}

mod counts {
    use super::*;

    #[test]
    fn by_kind() {
        let mut the_context = Context::from_config(Config::default());

        assert!(the_context.create_original(vec![1, 2, 3]).is_ok());
        assert!(the_context.create_original(vec![1, -2]).is_ok());
        assert!(the_context.create_irredundant(vec![-1, 2, 3]).is_ok());
        assert!(the_context.create_redundant(4, vec![-1, -2]).is_ok());
        let reference = the_context.create_redundant(4, vec![-1, -2, -3]).unwrap().reference().unwrap();

        let counts = the_context.clause_db.counts().clone();
        assert_eq!(counts.added, 5);
        assert_eq!(counts.original, 2);
        assert_eq!(counts.irredundant, 3);
        assert_eq!(counts.redundant, 2);
        assert_eq!(the_context.clause_db.current_clause_count(), 5);

        assert!(the_context.clause_db.mark_garbage(reference).is_ok());
        assert_eq!(the_context.clause_db.counts().redundant, 1);
        assert_eq!(
            the_context.clause_db.mark_garbage(reference),
            Err(err::ClauseDBError::AlreadyGarbage)
        );

        assert!(the_context.clause_db.delete_binary(-1, -2, true, 4, &mut the_context.watch_db).is_ok());
        assert_eq!(the_context.clause_db.counts().redundant, 0);
        assert_eq!(the_context.clause_db.counts().deleted, 1);
    }

    #[test]
    fn occurrences_of_irredundant_clauses() {
        let mut the_context = Context::from_config(Config::default());

        assert!(the_context.create_original(vec![1, 2, 3]).is_ok());
        assert!(the_context.create_original(vec![1, -2]).is_ok());
        assert!(the_context.create_redundant(5, vec![1, 2, 4]).is_ok());

        let occurrences = the_context.clause_db.occurrences();
        assert_eq!(occurrences.count(1), 2);
        assert_eq!(occurrences.count(-2), 1);
        assert_eq!(occurrences.count(4), 0);
    }
}

mod watches {
    use super::*;

    #[test]
    fn stored_clauses_are_watched() {
        let mut the_context = Context::from_config(Config::default());

        assert!(the_context.create_original(vec![1, 2]).is_ok());
        let long = the_context.create_redundant(5, vec![-3, 1, 4]).unwrap().reference().unwrap();

        let binary = the_context.watch_db.binary_watchers(2);
        assert_eq!(binary.len(), 1);
        assert_eq!(binary[0].other, 1);

        let watchers = the_context.watch_db.long_watchers(-3);
        assert_eq!(watchers.len(), 1);
        assert_eq!(watchers[0].clause, long);
        assert_eq!(watchers[0].blocker, 1);
        assert!(the_context.watch_db.long_watchers(4).is_empty());
    }

    #[test]
    fn pending_until_connected() {
        let mut the_context = Context::from_config(Config::default());
        the_context.watch_db.set_watching(false);

        let a = the_context.create_original(vec![1, 2, 3]).unwrap().reference().unwrap();
        let b = the_context.create_redundant(5, vec![-1, 2, 3]).unwrap().reference().unwrap();
        assert_eq!(the_context.watch_db.long_watch_count(), 0);

        assert!(the_context.clause_db.mark_garbage(b).is_ok());
        assert!(the_context.clause_db.connect_pending(&mut the_context.watch_db).is_ok());

        assert!(the_context.watch_db.is_watching());
        assert_eq!(the_context.watch_db.long_watch_count(), 2);
        assert_eq!(the_context.watch_db.long_watchers(1)[0].clause, a);
    }
}

mod callbacks {
    use super::*;

    #[test]
    fn births_and_deaths() {
        let mut the_context = Context::from_config(Config::default());

        let log = Rc::new(RefCell::new(Vec::<(char, ClauseId, Vec<i32>)>::new()));

        let original_log = log.clone();
        the_context.set_callback_original(Box::new(move |id: ClauseId, clause: &[i32], source: ClauseSource| {
            assert_eq!(source, ClauseSource::Original);
            original_log.borrow_mut().push(('o', id, clause.to_vec()));
        }));

        let addition_log = log.clone();
        the_context.set_callback_addition(Box::new(move |id: ClauseId, clause: &[i32], _: ClauseSource| {
            addition_log.borrow_mut().push(('a', id, clause.to_vec()));
        }));

        let delete_log = log.clone();
        the_context.set_callback_delete(Box::new(move |id: ClauseId, clause: &[i32]| {
            delete_log.borrow_mut().push(('d', id, clause.to_vec()));
        }));

        assert!(the_context.create_original(vec![2, 1, 3]).is_ok());
        let learned = the_context.create_redundant(4, vec![-1, 2, 3, 4]).unwrap().reference().unwrap();
        assert!(the_context.clause_db.shrink(learned, 3).is_ok());
        assert!(the_context.clause_db.mark_garbage(learned).is_ok());

        assert_eq!(
            *log.borrow(),
            vec![
                ('o', 1, vec![1, 2, 3]),
                ('a', 2, vec![-1, 2, 3, 4]),
                ('a', 2, vec![-1, 2, 3]),
                ('d', 2, vec![-1, 2, 3, 4]),
                ('d', 2, vec![-1, 2, 3]),
            ]
        );
    }
}
