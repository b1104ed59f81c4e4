//! Key structures, such as literals and clauses.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! Clauses handed to the [clause database](crate::db::clause) are given through the [Clause](clause::Clause) trait, and stored in the [arena](crate::db::arena) as a sequence of words.
//! So, the canonical implementations here are used at the boundary of the database, e.g. when building a clause to store or when passing the literals of a clause to a [callback](crate::context::callbacks).

pub mod atom;
pub mod clause;
pub mod literal;
