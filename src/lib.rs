//! The clause database of a conflict-driven clause-learning solver.
//!
//! otter_clause_db stores every clause a solver is given or learns, and periodically removes some of the learned (redundant) clauses to bound memory and keep propagation fast.
//!
//! Some guiding principles of otter_clause_db are:
//! - No address of a clause survives compaction.
//!   Clauses are held back-to-back in a single [arena](crate::db::arena), and are accessed through [references](crate::db::ClauseRef) which are offsets into the arena.
//! - Reduction is a pure ranking followed by a separate pass of mutation.
//!   Candidates are found by a scan, sorted by a key with a stable sort, and only then marked as garbage.
//! - The search is external.
//!   A search stores clauses and notes the use of clauses through the [context], and hands the context a [SolverState](crate::context::SolverState) when a reduction is due.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! - The [database module](crate::db) holds the arena, the [clause database](crate::db::clause) built on the arena, and [watch lists](crate::db::watches).
//! - The [reduction procedures](crate::procedures::reduce) decide which redundant clauses to remove, by either a static ranking or the scores of a [predictor](crate::predictor).
//! - The [configuration](crate::config) lists each option, with defaults and bounds.
//!
//! # Examples
//!
//! + Store some clauses, note some use, and reduce.
//!
//! ```rust
//! # use otter_clause_db::config::Config;
//! # use otter_clause_db::context::{Context, Snapshot};
//! # use otter_clause_db::reports::ReduceReport;
//! let mut config = Config::default();
//! config.reduction.reduce_init.value = 2;
//! config.reduction.reduce_fraction.value = 50;
//!
//! let mut the_context = Context::from_config(config);
//!
//! assert!(the_context.create_original(vec![1, 2, 3]).is_ok());
//! assert!(the_context.create_original(vec![-1, -2]).is_ok());
//!
//! let mut learned = Vec::new();
//! for glue in [3, 9] {
//!     let added = the_context.create_redundant(glue, vec![-1, 2, -3, 4]).unwrap();
//!     learned.push(added.reference().unwrap());
//! }
//!
//! // The clause of glue 3 is used, though this does not protect it from removal.
//! the_context.note_propagation(learned[0]).unwrap();
//!
//! the_context.note_conflict();
//! assert!(!the_context.reducing());
//! the_context.note_conflict();
//! assert!(the_context.reducing());
//!
//! let mut state = Snapshot::with_variables(4);
//! assert_eq!(the_context.reduce(&mut state), Ok(ReduceReport::Reduced { deleted: 1 }));
//!
//! // The clause of glue 9 was removed.
//! let live = the_context.clause_db.live_clauses().collect::<Vec<_>>();
//! assert_eq!(live.len(), 2);
//! assert_eq!(the_context.clause_db.counts().redundant, 1);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//!
//! ```sh
//! RUST_LOG=reduction=debug,side_table=trace cargo test
//! ```

pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod predictor;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
