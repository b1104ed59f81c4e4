//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use otter_clause_db::structures::literal::{CLiteral, Literal};
//! # use otter_clause_db::structures::clause::Clause;
//! let clause: Vec<CLiteral> = vec![23, -41, -3, 15, -4];
//!
//! assert_eq!(clause.size(), 5);
//! assert_eq!(clause.as_dimacs(true), " 23 -41 -3  15 -4 0");
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).
//!   Units are kept on the trail of the search, and so are never stored in the [clause database](crate::db::clause).

mod v_clause;

use crate::structures::literal::CLiteral;

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;
}

/// The implementation of a clause as a vector of literals.
pub type VClause = Vec<CLiteral>;

/// The canonical implementation of a clause.
pub type CClause = VClause;

/// The origin of a clause stored in the database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause read from a formula.
    Original,

    /// A clause part of the logical content of the formula, though not read from it (e.g. a resolvent kept by elimination, or a symmetry breaking clause).
    Irredundant,

    /// A learned clause, entailed by the formula.
    Redundant,
}

impl std::fmt::Display for ClauseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Original => write!(f, "original"),
            Self::Irredundant => write!(f, "irredundant"),
            Self::Redundant => write!(f, "redundant"),
        }
    }
}
