/*!
The context --- which holds the clause database, watch lists, counters, and configuration, and within which reductions take place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the [predictor](crate::predictor) used to score clauses when reducing by prediction.
A [Context] uses the bundled [LinearPredictor](crate::predictor::linear::LinearPredictor).

The search itself is external to the context.
The search stores clauses and notes conflicts through methods of the context, and hands a [SolverState] to each [reduction](crate::procedures::reduce) so the reduction may read and revise the state of the search.

# Example
```rust
# use otter_clause_db::context::{Context, Snapshot};
# use otter_clause_db::config::Config;
# use otter_clause_db::reports::ReduceReport;
let mut config = Config::default();
config.reduction.reduce_init.value = 0;
config.reduction.reduce_fraction.value = 100;

let mut the_context = Context::from_config(config);

assert!(the_context.create_original(vec![1, 2, 3]).is_ok());
assert!(the_context.create_redundant(7, vec![-1, -2, 4]).is_ok());
assert!(the_context.create_redundant(2, vec![-1, 2, -4]).is_ok());

the_context.note_conflict();
assert!(the_context.reducing());

let mut state = Snapshot::with_variables(4);
let report = the_context.reduce(&mut state).unwrap();

// The clause of glue 2 is kept.
assert_eq!(report, ReduceReport::Reduced { deleted: 1 });
assert_eq!(the_context.clause_db.counts().redundant, 1);
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod solver_state;
pub use solver_state::{Inconsistent, Snapshot, SolverState};
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// Some reduction has taken place.
    Solving,

    /// The formula is known to be unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}
