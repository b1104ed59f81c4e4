/*!
The layout of a clause record within the [arena](crate::db::arena).

A record is a fixed header of [HEADER_WORDS] words, followed by the literals of the clause, one literal per word.

| Word | Content |
|------|---------|
| 0 | glue (bits 0..22), [flags](Flag) (bits 22..30), used (bits 30..32) |
| 1 | identity |
| 2 | index of the row of the clause in the side table, as an `i32` with `-1` for none |
| 3 | count of propagations since the last reduction |
| 4 | count of uses as a first UIP reason since the last reduction |
| 5, 6 | conflict count of the last use, as the low and high words of a `u64` |
| 7 | size |
| 8.. | literals |

Access is through a [ClauseView] or [ClauseViewMut], each a borrow of the words of the arena from the start of the record.
Reading is shared through the [Record] trait.

# Shrunken clauses

A clause may be [shortened in place](crate::db::clause::ClauseDB::shrink).
On the first shrink the last slot of the original literals is overwritten with the sentinel word `0`, and the size field is revised.
So, the span of a shrunken record is found by scanning from the end of the live literals to the sentinel.
The span of a record never changes after allocation, and the arena may always be walked by [next](crate::db::arena::Arena::next).
*/

use crate::{
    config::{Glue, GLUE_BITS, MAX_GLUE},
    db::{arena::Word, ClauseId},
    structures::literal::{CLiteral, Literal},
};

use super::align_words;

/// The count of words in the header of a record.
pub const HEADER_WORDS: usize = 8;

/// The largest size of a clause.
pub const MAX_SIZE: usize = Word::MAX as usize - HEADER_WORDS;

/// The word marking the end of the literals of a shrunken clause.
pub const SENTINEL: Word = 0;

const GLUE_MASK: Word = (1 << GLUE_BITS) - 1;

const USED_SHIFT: u32 = 30;

/// The greatest value of the used counter.
pub const MAX_USED: u8 = 3;

const IDENTITY: usize = 1;
const SIDE_INDEX: usize = 2;
const PROPS_USED: usize = 3;
const UIP1_USED: usize = 4;
const TOUCHED_LO: usize = 5;
const TOUCHED_HI: usize = 6;
const SIZE: usize = 7;

/// Flags of a clause, each a single bit of the first word of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    /// The clause is unreachable, and the record will be reclaimed by the next compaction.
    Garbage,

    /// The clause is protected from the static strategy of reduction.
    Keep,

    /// The clause is the reason for some assignment.
    Reason,

    /// The clause was learned.
    Redundant,

    /// The literals of the clause were shortened after creation.
    Shrunken,

    /// Scratch flag for subsumption.
    Subsume,

    /// Scratch flag for sweeping.
    Sweeped,

    /// Scratch flag for vivification.
    Vivify,
}

impl Flag {
    const fn mask(self) -> Word {
        let bit = match self {
            Flag::Garbage => 0,
            Flag::Keep => 1,
            Flag::Reason => 2,
            Flag::Redundant => 3,
            Flag::Shrunken => 4,
            Flag::Subsume => 5,
            Flag::Sweeped => 6,
            Flag::Vivify => 7,
        };
        1 << (GLUE_BITS + bit)
    }
}

/// Reading the fields of a record.
pub trait Record {
    /// The words of the arena, from the start of the record.
    fn words(&self) -> &[Word];

    fn glue(&self) -> Glue {
        self.words()[0] & GLUE_MASK
    }

    fn flag(&self, flag: Flag) -> bool {
        self.words()[0] & flag.mask() != 0
    }

    fn is_garbage(&self) -> bool {
        self.flag(Flag::Garbage)
    }

    fn is_redundant(&self) -> bool {
        self.flag(Flag::Redundant)
    }

    /// The grace counter consumed by the static strategy.
    fn used(&self) -> u8 {
        (self.words()[0] >> USED_SHIFT) as u8
    }

    fn identity(&self) -> ClauseId {
        self.words()[IDENTITY]
    }

    /// The index of the row of the clause in the side table, if any.
    fn side_table_index(&self) -> Option<usize> {
        match self.words()[SIDE_INDEX] as i32 {
            -1 => None,
            index => Some(index as usize),
        }
    }

    fn props_used(&self) -> u32 {
        self.words()[PROPS_USED]
    }

    fn uip1_used(&self) -> u32 {
        self.words()[UIP1_USED]
    }

    fn last_touched(&self) -> u64 {
        let words = self.words();
        (words[TOUCHED_LO] as u64) | ((words[TOUCHED_HI] as u64) << 32)
    }

    fn size(&self) -> usize {
        self.words()[SIZE] as usize
    }

    /// The words of the live literals.
    fn literal_words(&self) -> &[Word] {
        &self.words()[HEADER_WORDS..HEADER_WORDS + self.size()]
    }

    /// An iterator over the (live) literals of the clause, in the order stored.
    fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.literal_words().iter().map(|word| CLiteral::from_word(*word))
    }

    /// The literals of the clause, as a vector.
    fn to_clause(&self) -> Vec<CLiteral> {
        self.literals().collect()
    }

    /// The count of words spanned by the record, including any literals after the end of a shrunken clause.
    fn actual_words(&self) -> usize {
        let words = self.words();
        let mut end = HEADER_WORDS + self.size();
        if self.flag(Flag::Shrunken) {
            while end < words.len() && words[end] != SENTINEL {
                end += 1;
            }
            end += 1;
        }
        align_words(end)
    }
}

/// A shared view of a record.
#[derive(Clone, Copy)]
pub struct ClauseView<'a> {
    words: &'a [Word],
}

impl<'a> ClauseView<'a> {
    pub(super) fn new(words: &'a [Word]) -> Self {
        ClauseView { words }
    }
}

impl Record for ClauseView<'_> {
    fn words(&self) -> &[Word] {
        self.words
    }
}

/// A mutable view of a record.
pub struct ClauseViewMut<'a> {
    words: &'a mut [Word],
}

impl Record for ClauseViewMut<'_> {
    fn words(&self) -> &[Word] {
        self.words
    }
}

impl<'a> ClauseViewMut<'a> {
    pub(super) fn new(words: &'a mut [Word]) -> Self {
        ClauseViewMut { words }
    }

    /// A view of the record, for reading (or display) only.
    pub fn as_view(&self) -> ClauseView<'_> {
        ClauseView { words: self.words }
    }

    /// Sets the glue of the clause, capped to [MAX_GLUE].
    pub fn set_glue(&mut self, glue: Glue) {
        let glue = std::cmp::min(glue, MAX_GLUE);
        self.words[0] = (self.words[0] & !GLUE_MASK) | glue;
    }

    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        match value {
            true => self.words[0] |= flag.mask(),
            false => self.words[0] &= !flag.mask(),
        }
    }

    /// Sets the used counter, saturating at [MAX_USED].
    pub fn set_used(&mut self, used: u8) {
        let used = std::cmp::min(used, MAX_USED) as Word;
        self.words[0] = (self.words[0] & !(0b11 << USED_SHIFT)) | (used << USED_SHIFT);
    }

    pub fn set_identity(&mut self, identity: ClauseId) {
        self.words[IDENTITY] = identity;
    }

    pub fn set_side_table_index(&mut self, index: Option<usize>) {
        self.words[SIDE_INDEX] = match index {
            None => -1_i32 as Word,
            Some(index) => index as Word,
        };
    }

    pub fn set_props_used(&mut self, count: u32) {
        self.words[PROPS_USED] = count;
    }

    pub fn set_uip1_used(&mut self, count: u32) {
        self.words[UIP1_USED] = count;
    }

    pub fn increment_props_used(&mut self) {
        self.words[PROPS_USED] = self.words[PROPS_USED].saturating_add(1);
    }

    pub fn increment_uip1_used(&mut self) {
        self.words[UIP1_USED] = self.words[UIP1_USED].saturating_add(1);
    }

    pub fn set_last_touched(&mut self, conflicts: u64) {
        self.words[TOUCHED_LO] = conflicts as Word;
        self.words[TOUCHED_HI] = (conflicts >> 32) as Word;
    }

    pub fn set_size(&mut self, size: usize) {
        self.words[SIZE] = size as Word;
    }

    /// Writes the literals of the clause and the size.
    ///
    /// The record must have been allocated with space for at least as many literals.
    pub fn write_literals(&mut self, literals: &[CLiteral]) {
        self.set_size(literals.len());
        for (slot, literal) in self.words[HEADER_WORDS..].iter_mut().zip(literals) {
            *slot = literal.as_word();
        }
    }

    /// A mutable slice of the live literals, e.g. to swap the watched literals.
    pub fn literal_words_mut(&mut self) -> &mut [Word] {
        let size = self.size();
        &mut self.words[HEADER_WORDS..HEADER_WORDS + size]
    }

    /// Shortens the clause to the first `size` literals.
    ///
    /// The first shrink of a clause places the sentinel in the last slot of the original literals.
    pub fn shrink(&mut self, size: usize) {
        let old_size = self.size();
        debug_assert!(size < old_size);
        if !self.flag(Flag::Shrunken) {
            self.words[HEADER_WORDS + old_size - 1] = SENTINEL;
            self.set_flag(Flag::Shrunken, true);
        }
        self.set_size(size);
    }

    /// Clears the counters of the current period of use.
    pub fn reset_usage(&mut self) {
        self.set_props_used(0);
        self.set_uip1_used(0);
    }
}

impl std::fmt::Display for ClauseView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let flags = [
            (Flag::Garbage, 'g'),
            (Flag::Keep, 'k'),
            (Flag::Reason, 'r'),
            (Flag::Redundant, 'l'),
            (Flag::Shrunken, 's'),
        ]
        .iter()
        .filter(|(flag, _)| self.flag(*flag))
        .map(|(_, c)| *c)
        .collect::<String>();

        write!(
            f,
            "#{} [{flags}] glue {} used {} props {} uip {} touched {} side {:?}:",
            self.identity(),
            self.glue(),
            self.used(),
            self.props_used(),
            self.uip1_used(),
            self.last_touched(),
            self.side_table_index(),
        )?;
        for literal in self.literals() {
            write!(f, " {literal}")?;
        }
        Ok(())
    }
}
