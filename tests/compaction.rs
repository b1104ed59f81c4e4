use otter_clause_db::{
    config::Config,
    context::Context,
    db::{
        arena::{record::Record, words_of_clause, WORD_BYTES},
        ClauseId, ClauseRef,
    },
};

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Stores a mix of clauses, shrinks some, and marks some as garbage.
///
/// Returns the reference, identity, and literals of each clause, together with whether the clause is garbage.
fn random_database(the_context: &mut Context, rng: &mut StdRng, count: usize) -> Vec<(ClauseRef, ClauseId, Vec<i32>, bool)> {
    let mut clauses = Vec::with_capacity(count);

    for _ in 0..count {
        let size = rng.random_range(3..10);
        let clause = (1..=size)
            .map(|atom| match rng.random_bool(0.5) {
                true => atom,
                false => -atom,
            })
            .collect::<Vec<i32>>();

        let added = match rng.random_bool(0.3) {
            true => the_context.create_original(clause),
            false => {
                let glue = rng.random_range(1..20);
                the_context.create_redundant(glue, clause)
            }
        }
        .unwrap();
        let reference = added.reference().unwrap();

        if size > 3 && rng.random_bool(0.3) {
            let shorter = rng.random_range(3..size) as usize;
            assert!(the_context.clause_db.shrink(reference, shorter).is_ok());
        }

        let garbage = rng.random_bool(0.4);
        if garbage {
            assert!(the_context.clause_db.mark_garbage(reference).is_ok());
        }

        let literals = the_context.clause_db.literals_of(reference).unwrap();
        clauses.push((reference, added.identity(), literals, garbage));
    }

    clauses
}

mod full {
    use super::*;

    #[test]
    fn survivors_in_order() {
        let mut the_context = Context::from_config(Config::default());
        let mut rng = StdRng::seed_from_u64(11);

        let clauses = random_database(&mut the_context, &mut rng, 200);

        let garbage_bytes = clauses
            .iter()
            .filter(|(_, _, _, garbage)| *garbage)
            .map(|(reference, ..)| the_context.clause_db.arena().clause(*reference).unwrap().actual_words() * WORD_BYTES)
            .sum::<usize>();
        assert_eq!(the_context.clause_db.counts().arena_garbage, garbage_bytes);

        let relocation = the_context.collect(ClauseRef::START).unwrap();

        let survivors = clauses
            .iter()
            .filter(|(_, _, _, garbage)| !*garbage)
            .collect::<Vec<_>>();

        let arena = the_context.clause_db.arena();
        let found = the_context
            .clause_db
            .live_clauses()
            .map(|reference| {
                let record = arena.clause(reference).unwrap();
                (record.identity(), record.to_clause())
            })
            .collect::<Vec<_>>();
        let expected = survivors
            .iter()
            .map(|(_, identity, literals, _)| (*identity, literals.clone()))
            .collect::<Vec<_>>();
        assert_eq!(found, expected);

        let words = survivors
            .iter()
            .map(|(_, _, literals, _)| words_of_clause(literals.len()))
            .sum::<usize>();
        assert_eq!(arena.len(), words);
        assert_eq!(the_context.clause_db.counts().arena_garbage, 0);

        for (reference, identity, _, garbage) in &clauses {
            match relocation.get(*reference) {
                Some(moved) => {
                    assert!(!garbage);
                    assert_eq!(arena.clause(moved).unwrap().identity(), *identity);
                    assert!(moved <= *reference);
                }
                None => assert!(garbage),
            }
        }

        assert_eq!(the_context.watch_db.long_watch_count(), 2 * survivors.len());
        for reference in the_context.clause_db.live_clauses() {
            let literals = arena.clause(reference).unwrap().to_clause();
            for literal in &literals[..2] {
                let watchers = the_context.watch_db.long_watchers(*literal);
                assert!(watchers.iter().any(|watch| watch.clause == reference));
            }
        }
    }

    #[test]
    fn nothing_to_drop() {
        let mut the_context = Context::from_config(Config::default());

        let a = the_context.create_original(vec![1, 2, 3]).unwrap().reference().unwrap();
        let b = the_context.create_redundant(4, vec![-1, 2, 3, 4]).unwrap().reference().unwrap();
        let words = the_context.clause_db.arena().len();

        let relocation = the_context.collect(ClauseRef::START).unwrap();
        assert_eq!(relocation.get(a), Some(a));
        assert_eq!(relocation.get(b), Some(b));
        assert_eq!(the_context.clause_db.arena().len(), words);
        assert_eq!(the_context.clause_db.counts().deleted, 0);
    }
}

mod partial {
    use super::*;

    #[test]
    fn records_before_the_start_are_untouched() {
        let mut the_context = Context::from_config(Config::default());
        let mut rng = StdRng::seed_from_u64(23);

        let clauses = random_database(&mut the_context, &mut rng, 60);
        let (start, ..) = clauses[30];

        let kept_garbage = clauses[..30]
            .iter()
            .filter(|(_, _, _, garbage)| *garbage)
            .map(|(reference, ..)| the_context.clause_db.arena().clause(*reference).unwrap().actual_words() * WORD_BYTES)
            .sum::<usize>();

        let relocation = the_context.collect(start).unwrap();
        assert_eq!(relocation.start(), start);
        assert_eq!(the_context.clause_db.counts().arena_garbage, kept_garbage);

        let arena = the_context.clause_db.arena();
        for (reference, identity, literals, garbage) in &clauses[..30] {
            assert_eq!(relocation.get(*reference), Some(*reference));
            let record = arena.clause(*reference).unwrap();
            assert_eq!(record.identity(), *identity);
            assert_eq!(record.is_garbage(), *garbage);
            assert_eq!(&record.to_clause(), literals);
        }

        let moved = relocation.moves().iter().map(|(_, new)| *new).collect::<Vec<_>>();
        let walked = arena.references_from(start).collect::<Vec<_>>();
        assert_eq!(moved, walked);
        assert_eq!(walked.len(), clauses[30..].iter().filter(|(.., garbage)| !*garbage).count());
    }
}
