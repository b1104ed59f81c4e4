/*!
A single growable buffer holding the records of all long clauses, back-to-back.

# Overview

Each long clause (a clause of three or more literals) is stored as a [record](record) of a fixed header followed by the literals of the clause.
Records are placed one after another, each aligned to [ALIGNMENT] words, and so the arena may be walked from any record to the next by adding the span of the record (see [next](Arena::next)) without any further structure.

Records are accessed through a [ClauseRef], an offset into the arena.
As an offset, a reference survives growth of the arena, though the [views](record::ClauseView) obtained by resolving a reference borrow the arena and so may not be held across growth (or any other mutation).

```rust
# use otter_clause_db::db::arena::{Arena, record::Record};
let mut arena = Arena::default();

let a = arena.allocate(3).unwrap();
arena.clause_mut(a).unwrap().set_identity(7);

// Growth of the arena moves the buffer, but not the offsets.
for _ in 0..1000 {
    arena.allocate(5).unwrap();
}

assert_eq!(arena.clause(a).unwrap().identity(), 7);
```

# Compaction

Garbage records are reclaimed only through [compaction](crate::db::clause::collect), which moves surviving records toward the start of the arena.
The arena itself only offers the primitives used by compaction (moving a span of words, and truncating).
*/

pub mod record;

use record::{ClauseView, ClauseViewMut, Record, HEADER_WORDS};

use crate::{
    db::ClauseRef,
    misc::log::targets::{self},
    types::err::{self},
};

/// The unit of storage in the arena.
pub type Word = u32;

/// The alignment, in words, of each record.
pub const ALIGNMENT: usize = 2;

/// The size in bytes of a word.
pub const WORD_BYTES: usize = std::mem::size_of::<Word>();

/// Rounds a count of words up to the alignment of a record.
pub const fn align_words(words: usize) -> usize {
    (words + ALIGNMENT - 1) & !(ALIGNMENT - 1)
}

/// The (aligned) count of words required to store a clause with `size` literals.
pub const fn words_of_clause(size: usize) -> usize {
    align_words(HEADER_WORDS + size)
}

/// The buffer of words.
#[derive(Default)]
pub struct Arena {
    words: Vec<Word>,
}

impl Arena {
    /// The count of words in the arena, including words of garbage records.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the arena contains no records.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The size in bytes of the arena, including bytes of garbage records.
    pub fn bytes(&self) -> usize {
        self.words.len() * WORD_BYTES
    }

    /// The reference one past the last record of the arena.
    pub fn end(&self) -> ClauseRef {
        ClauseRef::from_offset(self.words.len() as Word)
    }

    /// Appends a zeroed record with space for a clause of `size` literals, and returns a reference to the record.
    ///
    /// The buffer grows geometrically, as needed.
    /// Growth invalidates any address within the buffer, though no reference.
    ///
    /// An error is returned if the record would end beyond the greatest offset a reference may hold.
    pub fn allocate(&mut self, size: usize) -> Result<ClauseRef, err::ArenaError> {
        let offset = self.words.len();
        let words = words_of_clause(size);

        let required = offset.checked_add(words).ok_or(err::ArenaError::Exhausted)?;
        if required >= ClauseRef::INVALID.offset() {
            log::error!(target: targets::ARENA, "Arena exhausted at {offset} words");
            return Err(err::ArenaError::Exhausted);
        }

        if required > self.words.capacity() {
            log::trace!(target: targets::ARENA, "Growth from a capacity of {} words", self.words.capacity());
        }

        self.words.resize(required, 0);
        Ok(ClauseRef::from_offset(offset as Word))
    }

    /// Whether `reference` may be resolved to a record.
    ///
    /// Note, this checks only that the header of a record fits within the arena at an aligned offset.
    fn validate(&self, reference: ClauseRef) -> Result<usize, err::ArenaError> {
        let offset = reference.offset();
        if !reference.is_valid()
            || offset % ALIGNMENT != 0
            || offset + HEADER_WORDS > self.words.len()
        {
            log::error!(target: targets::ARENA, "Invalid reference {reference} with {} words", self.words.len());
            return Err(err::ArenaError::InvalidReference);
        }
        Ok(offset)
    }

    /// A view of the record at `reference`.
    pub fn clause(&self, reference: ClauseRef) -> Result<ClauseView<'_>, err::ArenaError> {
        let offset = self.validate(reference)?;
        let view = ClauseView::new(&self.words[offset..]);
        debug_assert!(HEADER_WORDS + view.size() <= self.words.len() - offset);
        Ok(view)
    }

    /// A mutable view of the record at `reference`.
    pub fn clause_mut(&mut self, reference: ClauseRef) -> Result<ClauseViewMut<'_>, err::ArenaError> {
        let offset = self.validate(reference)?;
        Ok(ClauseViewMut::new(&mut self.words[offset..]))
    }

    /// The reference to the record immediately after the record at `reference`.
    ///
    /// The actual span of the record is used, and so this is well defined for shrunken clauses.
    pub fn next(&self, reference: ClauseRef) -> Result<ClauseRef, err::ArenaError> {
        let span = self.clause(reference)?.actual_words();
        Ok(ClauseRef::from_offset((reference.offset() + span) as Word))
    }

    /// An iterator over the references of all records at or after `start`.
    ///
    /// The iterator borrows the arena, so for walks which mutate records prefer a loop over [next](Arena::next).
    pub fn references_from(&self, start: ClauseRef) -> References<'_> {
        References {
            arena: self,
            current: start,
        }
    }

    /// Copies the words in `source` to the words starting at `destination`.
    pub(crate) fn copy_within(&mut self, source: std::ops::Range<usize>, destination: usize) {
        self.words.copy_within(source, destination);
    }

    /// Drops every word from `end` onwards.
    pub(crate) fn truncate(&mut self, end: ClauseRef) {
        self.words.truncate(end.offset());
    }

    /// Releases capacity of the buffer beyond twice the current length.
    pub(crate) fn shrink_to_fit_loosely(&mut self) {
        let target = self.words.len() * 2;
        if self.words.capacity() > target {
            self.words.shrink_to(target);
        }
    }
}

/// An iterator over references to records, from some start to the end of the arena.
pub struct References<'a> {
    arena: &'a Arena,
    current: ClauseRef,
}

impl Iterator for References<'_> {
    type Item = ClauseRef;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.offset() >= self.arena.len() {
            return None;
        }
        let here = self.current;
        match self.arena.next(here) {
            Ok(next) => self.current = next,
            Err(_) => return None,
        }
        Some(here)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment() {
        assert_eq!(align_words(0), 0);
        assert_eq!(align_words(1), 2);
        assert_eq!(align_words(2), 2);
        assert_eq!(align_words(11), 12);
        assert_eq!(words_of_clause(3), 12);
        assert_eq!(words_of_clause(4), 12);
    }

    #[test]
    fn allocation_is_contiguous() {
        let mut arena = Arena::default();
        let a = arena.allocate(3).unwrap();
        let b = arena.allocate(4).unwrap();
        let c = arena.allocate(5).unwrap();

        assert_eq!(a.offset(), 0);
        assert_eq!(b.offset(), words_of_clause(3));
        assert_eq!(c.offset(), words_of_clause(3) + words_of_clause(4));

        for (reference, size) in [(a, 3), (b, 4), (c, 5)] {
            arena.clause_mut(reference).unwrap().set_size(size);
        }
        assert_eq!(arena.references_from(ClauseRef::START).count(), 3);
    }

    #[test]
    fn invalid_references() {
        let mut arena = Arena::default();
        arena.allocate(3).unwrap();

        assert!(arena.clause(ClauseRef::INVALID).is_err());
        assert!(arena.clause(ClauseRef::from_offset(1)).is_err());
        assert!(arena.clause(arena.end()).is_err());
    }
}
