//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use, and indicate some misuse of the library by a caller (e.g. a stale reference).
//! - Some are resource limits --- e.g. the arena has exhausted the space addressable by a [ClauseRef](crate::db::ClauseRef).
//!   These are not recoverable, and the caller is expected to halt.
//! - Some are external --- e.g. a [predictor](crate::predictor) may fail to load a model.
//!
//! Note, determining a formula is unsatisfiable during a reduction is not an error.
//! Instead, see [ReduceReport](crate::reports::ReduceReport).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// The top-level error type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Arena(ArenaError),
    ClauseDB(ClauseDBError),
    Predictor(PredictorError),
    SideTable(SideTableError),

    /// A method was called in a state of the context which does not support the method.
    InvalidState,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arena(e) => write!(f, "arena: {e:?}"),
            Self::ClauseDB(e) => write!(f, "clause database: {e:?}"),
            Self::Predictor(e) => write!(f, "predictor: {e:?}"),
            Self::SideTable(e) => write!(f, "side table: {e:?}"),
            Self::InvalidState => write!(f, "invalid state"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The arena has grown beyond the offsets a reference may hold.
    Exhausted,

    /// A reference does not point to the start of a record within the current extent of the arena.
    InvalidReference,
}

impl From<ArenaError> for ErrorKind {
    fn from(e: ArenaError) -> Self {
        ErrorKind::Arena(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// Some attempt was made to store a unit clause.
    /// Units are kept by the search, not the clause database.
    UnitClause,

    /// A literal appears twice in a clause.
    DuplicateLiteral,

    /// A literal and its negation appear in a clause.
    Tautology,

    /// The integer `0` appears in a clause, though `0` is the sentinel of a shrunken record and never a literal.
    ZeroLiteral,

    /// A clause is too long for the size field of a record.
    TooLarge,

    /// All identities have been used.
    StorageExhausted,

    /// A clause was marked as garbage twice.
    AlreadyGarbage,

    /// A clause which is the reason for some assignment was to be marked as garbage.
    ReasonClause,

    /// A request to shrink a clause would not shorten the clause, or would leave fewer than three literals.
    InvalidShrink,

    /// A redundant clause was expected.
    NotRedundant,

    /// A watch for some binary clause is missing.
    Missing,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

impl From<ArenaError> for ClauseDBError {
    fn from(e: ArenaError) -> Self {
        match e {
            ArenaError::Exhausted => ClauseDBError::StorageExhausted,
            ArenaError::InvalidReference => ClauseDBError::Missing,
        }
    }
}

/// Errors at the boundary with a predictor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PredictorError {
    /// Models were loaded or a prediction requested before setup.
    NotSetup,

    /// Models may only be loaded once.
    ModelsAlreadyLoaded,

    /// A prediction was requested before models were loaded.
    ModelsNotLoaded,

    /// A request was made to a scoring context which does not exist.
    ContextIndex(usize),

    /// The submitted matrix is not a whole number of rows of the feature schema.
    ColumnMismatch,

    /// The predictor returned a different number of scores than rows submitted.
    RowCount { expected: usize, found: usize },

    /// A model artifact could not be read as a model.
    Model(String),

    /// A model artifact could not be read.
    Io(std::io::ErrorKind),
}

impl From<PredictorError> for ErrorKind {
    fn from(e: PredictorError) -> Self {
        ErrorKind::Predictor(e)
    }
}

impl From<std::io::Error> for PredictorError {
    fn from(e: std::io::Error) -> Self {
        PredictorError::Io(e.kind())
    }
}

/// Errors in the side table of extended statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideTableError {
    /// The identity of a row differs from the identity of the clause linked to the row.
    IdentityMismatch,

    /// A clause is linked to a row which is not in the table.
    MissingRow,
}

impl From<SideTableError> for ErrorKind {
    fn from(e: SideTableError) -> Self {
        ErrorKind::SideTable(e)
    }
}
