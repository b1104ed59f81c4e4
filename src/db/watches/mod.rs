/*!
Watch lists, for each literal.

The watch list of a literal contains each clause which watches the literal.
A binary clause watches both of its literals, and a long clause watches the first two literals in the [record](crate::db::arena::record) of the clause.

- A [BinaryWatch] carries the other literal of the clause, as a binary clause is only ever stored in watch lists.
- A [LongWatch] carries a [reference](ClauseRef) to the clause in the arena, together with a 'blocking' literal (the other watched literal at the time the watch was made).

# Connection

While [watching](WatchDB::is_watching), long clauses are watched as they are stored.
Otherwise, references to fresh long clauses are queued, and connected in bulk (e.g. after some simplification) by [connect_pending](crate::db::clause::ClauseDB::connect_pending).

# Relocation

As [compaction](crate::db::clause::collect) moves clauses, watches of long clauses are [relocated](WatchDB::relocate) after compaction, and watches of deleted clauses are dropped.
*/

use crate::{
    db::{clause::collect::Relocation, ClauseId, ClauseRef},
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

/// A watch for a binary clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryWatch {
    /// The other literal of the clause.
    pub other: CLiteral,

    /// Whether the clause is redundant.
    pub redundant: bool,

    /// The identity of the clause.
    pub identity: ClauseId,
}

/// A watch for a long clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LongWatch {
    /// Some other literal of the clause.
    pub blocker: CLiteral,

    /// The clause.
    pub clause: ClauseRef,
}

/// The watches of a single literal.
#[derive(Default)]
struct WatchList {
    binary: Vec<BinaryWatch>,
    long: Vec<LongWatch>,
}

/// Watch lists for each literal, indexed by [Literal::index].
pub struct WatchDB {
    lists: Vec<WatchList>,

    /// Whether long clauses are watched as stored.
    watching: bool,

    /// Long clauses stored while not watching.
    pending: Vec<ClauseRef>,
}

impl Default for WatchDB {
    fn default() -> Self {
        WatchDB {
            lists: Vec::default(),
            watching: true,
            pending: Vec::default(),
        }
    }
}

impl WatchDB {
    fn list_mut(&mut self, literal: CLiteral) -> &mut WatchList {
        let index = literal.index();
        if index >= self.lists.len() {
            // Both literals of the atom.
            self.lists.resize_with((index | 1) + 1, WatchList::default);
        }
        &mut self.lists[index]
    }

    /// Whether long clauses are watched as stored.
    pub fn is_watching(&self) -> bool {
        self.watching
    }

    /// Sets whether long clauses are watched as stored.
    pub fn set_watching(&mut self, watching: bool) {
        log::trace!(target: targets::WATCHES, "Watching: {watching}");
        self.watching = watching;
    }

    /// Adds watches for the binary clause of `a` and `b`.
    pub fn watch_binary(&mut self, a: CLiteral, b: CLiteral, redundant: bool, identity: ClauseId) {
        self.list_mut(a).binary.push(BinaryWatch {
            other: b,
            redundant,
            identity,
        });
        self.list_mut(b).binary.push(BinaryWatch {
            other: a,
            redundant,
            identity,
        });
    }

    /// Removes the watches for the binary clause of `a` and `b` with `identity`.
    pub fn unwatch_binary(
        &mut self,
        a: CLiteral,
        b: CLiteral,
        identity: ClauseId,
    ) -> Result<(), err::ClauseDBError> {
        for (watched, other) in [(a, b), (b, a)] {
            let list = &mut self.list_mut(watched).binary;
            match list
                .iter()
                .position(|watch| watch.identity == identity && watch.other == other)
            {
                Some(index) => {
                    list.swap_remove(index);
                }
                None => {
                    log::error!(target: targets::WATCHES, "Missing binary watch #{identity} on {watched}");
                    return Err(err::ClauseDBError::Missing);
                }
            }
        }
        Ok(())
    }

    /// Adds watches for the long clause at `clause` on the literals `a` and `b`, each blocked by the other.
    pub fn watch_long(&mut self, clause: ClauseRef, a: CLiteral, b: CLiteral) {
        self.list_mut(a).long.push(LongWatch { blocker: b, clause });
        self.list_mut(b).long.push(LongWatch { blocker: a, clause });
    }

    /// Queues a long clause to be watched on the next connection.
    pub fn queue_pending(&mut self, clause: ClauseRef) {
        self.pending.push(clause);
    }

    /// Takes every queued long clause.
    pub fn take_pending(&mut self) -> Vec<ClauseRef> {
        std::mem::take(&mut self.pending)
    }

    /// The binary clauses watching `literal`.
    pub fn binary_watchers(&self, literal: CLiteral) -> &[BinaryWatch] {
        match self.lists.get(literal.index()) {
            Some(list) => &list.binary,
            None => &[],
        }
    }

    /// The long clauses watching `literal`.
    pub fn long_watchers(&self, literal: CLiteral) -> &[LongWatch] {
        match self.lists.get(literal.index()) {
            Some(list) => &list.long,
            None => &[],
        }
    }

    /// The count of watches of long clauses, across all literals.
    pub fn long_watch_count(&self) -> usize {
        self.lists.iter().map(|list| list.long.len()).sum()
    }

    /// Revises watches of long clauses after compaction.
    ///
    /// Watches of clauses dropped by compaction are removed, and all other watches are revised to the new reference of the clause.
    /// Queued clauses are revised in the same way.
    pub fn relocate(&mut self, relocation: &Relocation) {
        let mut dropped = 0;
        for list in &mut self.lists {
            list.long.retain_mut(|watch| match relocation.get(watch.clause) {
                Some(moved) => {
                    watch.clause = moved;
                    true
                }
                None => {
                    dropped += 1;
                    false
                }
            });
        }

        self.pending
            .retain_mut(|clause| match relocation.get(*clause) {
                Some(moved) => {
                    *clause = moved;
                    true
                }
                None => false,
            });

        log::debug!(target: targets::WATCHES, "Relocation dropped {dropped} long watches");
    }
}
