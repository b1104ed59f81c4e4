use crate::{db::arena::Word, structures::atom::Atom};

use super::{CLiteral, Literal};

/// The representation of a literal as a signed integer, with the sign indicating polarity.
pub type IntLiteral = i32;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn canonical(&self) -> CLiteral {
        *self
    }

    fn as_int(&self) -> isize {
        *self as isize
    }

    fn index(&self) -> usize {
        2 * self.unsigned_abs() as usize + self.is_positive() as usize
    }

    fn as_word(&self) -> Word {
        *self as Word
    }

    fn from_word(word: Word) -> Self {
        word as IntLiteral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_conversion_preserves_sign() {
        for literal in [1, -1, 42, -42, i32::MAX, -i32::MAX] {
            let word = literal.as_word();
            assert_ne!(word, 0);
            assert_eq!(IntLiteral::from_word(word), literal);
        }
    }

    #[test]
    fn indices_pair_atoms() {
        let p: IntLiteral = 3;
        assert_eq!(p.negate().index(), 6);
        assert_eq!(p.index(), 7);
        assert_eq!(p.negate().index() + 1, p.index());
    }
}
