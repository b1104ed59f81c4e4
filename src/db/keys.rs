use crate::db::arena::Word;

/// The identity of a clause.
///
/// Identities are assigned from a single counter, shared by binary and long clauses, and so are unique to a clause within a context.
pub type ClauseId = u32;

/// A reference to a long clause stored in the [arena](crate::db::arena).
///
/// A reference is an offset (counted in [words](Word)) from the start of the arena, and never an address.
/// So, a reference is unaffected by growth of the arena.
/// Though, after [compaction](crate::db::clause::collect) a reference must be relocated, as the clause may have moved.
///
/// ```rust
/// # use otter_clause_db::db::ClauseRef;
/// assert!(!ClauseRef::INVALID.is_valid());
/// assert!(ClauseRef::from_offset(8) < ClauseRef::from_offset(16));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ClauseRef(Word);

impl ClauseRef {
    /// A reference to no clause.
    pub const INVALID: Self = ClauseRef(Word::MAX);

    /// The reference to the start of the arena.
    pub const START: Self = ClauseRef(0);

    /// A reference from an offset.
    ///
    /// The offset is not checked, and resolving the reference will fail if the offset is not the start of a record.
    pub const fn from_offset(offset: Word) -> Self {
        ClauseRef(offset)
    }

    /// The offset of the reference, in words.
    pub const fn offset(&self) -> usize {
        self.0 as usize
    }

    /// Whether the reference is something other than [INVALID](ClauseRef::INVALID).
    pub const fn is_valid(&self) -> bool {
        self.0 != Word::MAX
    }
}

impl Default for ClauseRef {
    fn default() -> Self {
        Self::INVALID
    }
}

impl std::fmt::Display for ClauseRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.is_valid() {
            true => write!(f, "@{}", self.0),
            false => write!(f, "@INVALID"),
        }
    }
}
