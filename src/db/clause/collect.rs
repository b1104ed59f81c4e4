/*!
Compaction of the arena.

Compaction walks the records of the arena from some start, drops each garbage record, and moves each surviving record toward the start of the arena, preserving the order of the records.
Only the live literals of a surviving record are moved, and so a [shrunken](crate::db::arena::record) record is no longer shrunken after compaction.

Records before the start are untouched.

Every reference held outside of the arena to a record at or after the start may be invalid after compaction.
So, compaction returns a [Relocation], from which the new reference of each surviving record may be found:
- References held by the clause database (e.g. the first reducible clause, rows of the side table) are revised by compaction.
- References held by [watch lists](crate::db::watches) are revised by compaction.
- References held by the search (e.g. the reasons for assignments) should be revised by the caller.

```rust
# use otter_clause_db::context::Context;
# use otter_clause_db::config::Config;
# use otter_clause_db::db::ClauseRef;
let mut the_context = Context::from_config(Config::default());

let a = the_context.create_redundant(6, vec![1, 2, 3]).unwrap().reference().unwrap();
let b = the_context.create_redundant(6, vec![-1, 2, 4]).unwrap().reference().unwrap();

the_context.clause_db.mark_garbage(a).unwrap();
let relocation = the_context.collect(ClauseRef::START).unwrap();

assert_eq!(relocation.get(a), None);
assert_eq!(relocation.get(b), Some(a));
```
*/

use crate::{
    db::{
        arena::{
            record::{Flag, Record, HEADER_WORDS},
            words_of_clause, Word, WORD_BYTES,
        },
        watches::WatchDB,
        ClauseRef,
    },
    misc::log::targets::{self},
    types::err::{self},
};

use super::ClauseDB;

/// The movement of records by a compaction.
#[derive(Clone, Debug, Default)]
pub struct Relocation {
    /// References before this reference were not moved.
    start: ClauseRef,

    /// Pairs of the old and new references of each surviving record at or after the start, ordered by the old reference.
    moves: Vec<(ClauseRef, ClauseRef)>,
}

impl Relocation {
    /// The reference after compaction of the record at `reference` before compaction, if the record survived.
    pub fn get(&self, reference: ClauseRef) -> Option<ClauseRef> {
        if !reference.is_valid() {
            return None;
        }
        if reference < self.start {
            return Some(reference);
        }
        match self.moves.binary_search_by_key(&reference, |(old, _)| *old) {
            Ok(index) => Some(self.moves[index].1),
            Err(_) => None,
        }
    }

    /// The reference from which records may have moved.
    pub fn start(&self) -> ClauseRef {
        self.start
    }

    /// Pairs of the old and new references of each surviving record at or after the start.
    pub fn moves(&self) -> &[(ClauseRef, ClauseRef)] {
        &self.moves
    }
}

impl ClauseDB {
    /// Compacts the arena from `start`, dropping garbage records, and revises references held by the database and `watches`.
    pub fn collect(&mut self, start: ClauseRef, watches: &mut WatchDB) -> Result<Relocation, err::ClauseDBError> {
        let end = self.arena.len();
        let mut read = start.offset();
        let mut write = start.offset();

        let mut relocation = Relocation {
            start,
            moves: Vec::default(),
        };

        let mut dropped = 0;
        let mut reclaimed = 0;
        let mut first_reducible = ClauseRef::INVALID;
        let mut last_irredundant = ClauseRef::INVALID;

        while read < end {
            let old = ClauseRef::from_offset(read as Word);
            let record = self.arena.clause(old)?;
            let span = record.actual_words();

            if record.is_garbage() {
                dropped += 1;
                reclaimed += span * WORD_BYTES;
                read += span;
                continue;
            }

            let size = record.size();
            let redundant = record.is_redundant();
            let keep = record.flag(Flag::Keep);

            let new = ClauseRef::from_offset(write as Word);
            if read != write {
                self.arena.copy_within(read..read + HEADER_WORDS + size, write);
            }
            self.arena.clause_mut(new)?.set_flag(Flag::Shrunken, false);

            match redundant {
                true => {
                    if !keep && !first_reducible.is_valid() {
                        first_reducible = new;
                    }
                }
                false => last_irredundant = new,
            }

            relocation.moves.push((old, new));
            read += span;
            write += words_of_clause(size);
        }

        self.arena.truncate(ClauseRef::from_offset(write as Word));
        self.arena.shrink_to_fit_loosely();

        debug_assert!(self.counts.arena_garbage >= reclaimed);
        self.counts.arena_garbage = self.counts.arena_garbage.saturating_sub(reclaimed);
        self.counts.deleted += dropped;

        self.first_reducible = first_reducible;

        if last_irredundant.is_valid() {
            self.last_irredundant = last_irredundant;
        } else if self.last_irredundant.is_valid() && self.last_irredundant >= start {
            self.last_irredundant = self.last_irredundant_before(start)?;
        }

        self.side_table.relocate(&relocation);
        watches.relocate(&relocation);

        log::debug!(target: targets::COLLECT, "Collected from {start}: {dropped} dropped, {reclaimed} bytes reclaimed, {} words remain", self.arena.len());

        Ok(relocation)
    }

    /// The last irredundant clause strictly before `end`, found by walking the arena from the start.
    fn last_irredundant_before(&self, end: ClauseRef) -> Result<ClauseRef, err::ClauseDBError> {
        let mut last = ClauseRef::INVALID;
        for reference in self.arena.references_from(ClauseRef::START) {
            if reference >= end {
                break;
            }
            let record = self.arena.clause(reference)?;
            if !record.is_garbage() && !record.is_redundant() {
                last = reference;
            }
        }
        Ok(last)
    }
}
