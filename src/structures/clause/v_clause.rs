//! Implementation of clause trait for a vector of literals.

use crate::structures::{
    clause::Clause,
    literal::{CLiteral, Literal},
};

use std::ops::Deref;

use super::{CClause, VClause};

impl Clause for VClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self.deref() {
            let the_represenetation = match literal.polarity() {
                true => format!(" {} ", literal.atom()),
                false => format!("-{} ", literal.atom()),
            };
            the_string.push_str(the_represenetation.as_str());
        }
        if zero {
            the_string += "0";
            the_string
        } else {
            the_string.pop();
            the_string
        }
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn canonical(self) -> CClause {
        self
    }
}
