//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The canonical implementation of the literal trait is [IntLiteral], an integer with the sign of the integer indicating the polarity of the literal.
//!
//! ```rust
//! # use otter_clause_db::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert!(!literal.negate().polarity());
//! assert_eq!(literal.negate(), -79);
//! ```
//!
//! Implementation of the literal trait requires implementation of two additional traits:
//! - [Ord]
//! - [Hash](std::hash::Hash)
//!   + Literals are hashable in order to allow for straightforward use of literals as indicies of maps, etc.
//!
//! # Words
//!
//! Within the [arena](crate::db::arena) a literal is stored as a single [Word](crate::db::arena::Word).
//! The conversion is the bit-preserving cast of the integer, and so the word `0` is never the word of a literal.

mod int_literal;
pub use int_literal::IntLiteral;

use crate::{db::arena::Word, structures::atom::Atom};

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in it's 'canonical' form.
    fn canonical(&self) -> CLiteral;

    /// The literal in it's integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;

    /// A dense index of the literal, with the two literals of an atom adjacent.
    ///
    /// Used to index [watch lists](crate::db::watches) and [occurrences](crate::db::occurrences).
    fn index(&self) -> usize;

    /// The arena word of the literal.
    fn as_word(&self) -> Word;

    /// The literal stored as an arena word.
    ///
    /// The word must have been obtained from [as_word](Literal::as_word).
    fn from_word(word: Word) -> Self;
}

/// The canonical implementation of a literal.
pub type CLiteral = IntLiteral;
