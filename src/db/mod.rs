//! Databases for holding information relevant to a solve.
//!
//!   - [The arena](crate::db::arena)
//!     + A single growable buffer holding every long (three or more literal) clause, back-to-back.
//!       Clauses in the arena are accessed through [references](ClauseRef), which are offsets rather than addresses.
//!   - [The clause database](crate::db::clause)
//!     + The arena together with the bookkeeping of the clauses within: identities, counts, a side table of extended statistics, and callbacks made on the birth and death of a clause.
//!       From an external perspective there are three kinds of clause:
//!       * Original clauses \
//!         Read from the formula whose satisfiability is of interest.
//!       * Irredundant clauses \
//!         Part of the logical content of the formula, though added by some procedure.
//!       * Redundant clauses \
//!         Learned clauses, entailed by the formula, which may be removed without affecting satisfiability.
//!   - [Watch lists](crate::db::watches)
//!     + The lists of clauses watching each literal, used by propagation.
//!       Binary clauses live only here.
//!   - [Occurrences](crate::db::occurrences)
//!     + A count of the irredundant clauses in which each literal occurs.

pub mod arena;
pub mod clause;
mod keys;
pub use keys::*;
pub mod occurrences;
pub mod watches;
