/*!
A database of clause related things.

Long clauses (of three or more literals) are stored in the [arena](crate::db::arena), and binary clauses are stored only in [watch lists](crate::db::watches).
Each clause, binary or long, is given an identity from a single counter when stored.

Alongside the arena, the database holds:
- A [side table](side_table) of extended statistics, for redundant clauses, used when reducing by prediction.
- [Occurrences](crate::db::occurrences) of literals in irredundant clauses.
- [Counts](ClauseCounts) of clauses by kind, and of bytes of garbage in the arena.
- Two cached references: the first position in the arena at which a reducible clause may be found, and the last irredundant clause.

Fields of the database are private to ensure the use of methods which may be needed to uphold invariants.
Though, to support the [reduction](crate::procedures::reduce) procedures, some fields are visible within the crate.

# Lifecycle

A long clause is [stored](ClauseDB::store), may be [shrunk](ClauseDB::shrink) or [promoted](ClauseDB::make_irredundant), and is eventually [marked as garbage](ClauseDB::mark_garbage).
The record of a garbage clause remains in the arena until the next [compaction](collect).
*/

mod callbacks;
pub mod collect;
mod garbage;
pub mod side_table;
mod store;
pub use store::ClauseAdded;
mod usage;

use crate::{
    context::callbacks::{CallbackOnClause, CallbackOnClauseSource, CallbackOnFeatures},
    db::{
        arena::{record::Record, Arena},
        occurrences::Occurrences,
        ClauseId, ClauseRef,
    },
    structures::literal::CLiteral,
    types::err::{self},
};

use side_table::SideTable;

/// Counts of clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClauseCounts {
    /// Every clause stored, binary or long.
    pub added: usize,

    /// Every original clause stored.
    pub original: usize,

    /// Current irredundant (including original) clauses.
    pub irredundant: usize,

    /// Current redundant clauses.
    pub redundant: usize,

    /// Clauses whose storage has been reclaimed, binary clauses included.
    pub deleted: usize,

    /// Clauses marked as garbage by a reduction.
    pub reduced: usize,

    /// Bytes of the arena held by garbage records.
    pub arena_garbage: usize,
}

/// A database of clause related things.
///
/// The database holds no configuration.
/// Methods which depend on some option are given the relevant part of the configuration of the context.
pub struct ClauseDB {
    /// Records of long clauses.
    pub(crate) arena: Arena,

    /// Extended statistics of redundant clauses.
    pub(crate) side_table: SideTable,

    /// Occurrences of literals in irredundant clauses.
    occurrences: Occurrences,

    /// Counts of clauses.
    pub(crate) counts: ClauseCounts,

    /// The identity to be given to the next clause.
    next_identity: ClauseId,

    /// No reducible clause is found in the arena before this reference.
    pub(crate) first_reducible: ClauseRef,

    /// The last irredundant clause in the arena.
    last_irredundant: ClauseRef,

    /// Original clauses are passed in.
    callback_original: Option<Box<CallbackOnClauseSource>>,

    /// Non-original clauses are passed in.
    callback_addition: Option<Box<CallbackOnClauseSource>>,

    /// Deleted clauses are passed in.
    callback_delete: Option<Box<CallbackOnClause>>,

    /// Features of redundant clauses are passed in, when generating data.
    callback_ml_data: Option<Box<CallbackOnFeatures>>,
}

impl ClauseDB {
    /// A new, empty, [ClauseDB].
    pub fn new() -> Self {
        ClauseDB {
            arena: Arena::default(),
            side_table: SideTable::default(),
            occurrences: Occurrences::default(),
            counts: ClauseCounts::default(),

            next_identity: 1,
            first_reducible: ClauseRef::INVALID,
            last_irredundant: ClauseRef::INVALID,

            callback_original: None,
            callback_addition: None,
            callback_delete: None,
            callback_ml_data: None,
        }
    }
}

impl Default for ClauseDB {
    fn default() -> Self {
        Self::new()
    }
}

impl ClauseDB {
    /// The arena of long clauses.
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// The side table of extended statistics.
    pub fn side_table(&self) -> &SideTable {
        &self.side_table
    }

    /// Occurrences of literals in irredundant clauses.
    pub fn occurrences(&self) -> &Occurrences {
        &self.occurrences
    }

    /// Counts of clauses.
    pub fn counts(&self) -> &ClauseCounts {
        &self.counts
    }

    /// The earliest reference at which a reducible clause may be found, if any.
    pub fn first_reducible(&self) -> ClauseRef {
        self.first_reducible
    }

    /// The last irredundant clause in the arena, if any.
    pub fn last_irredundant(&self) -> ClauseRef {
        self.last_irredundant
    }

    /// The count of current clauses, binary or long.
    pub fn current_clause_count(&self) -> usize {
        self.counts.irredundant + self.counts.redundant
    }

    /// The literals of the long clause at `reference`.
    pub fn literals_of(&self, reference: ClauseRef) -> Result<Vec<CLiteral>, err::ArenaError> {
        Ok(self.arena.clause(reference)?.to_clause())
    }

    /// An iterator over references to every live (non-garbage) long clause, in arena order.
    pub fn live_clauses(&self) -> impl Iterator<Item = ClauseRef> + '_ {
        self.arena
            .references_from(ClauseRef::START)
            .filter(|reference| match self.arena.clause(*reference) {
                Ok(clause) => !clause.is_garbage(),
                Err(_) => false,
            })
    }

    /// Draws a fresh identity.
    fn fresh_identity(&mut self) -> Result<ClauseId, err::ClauseDBError> {
        if self.next_identity == ClauseId::MAX {
            return Err(err::ClauseDBError::StorageExhausted);
        }
        let identity = self.next_identity;
        self.next_identity += 1;
        Ok(identity)
    }
}
