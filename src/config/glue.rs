/// Literal block distance, a.k.a 'glue'.
///
/// Glue is computed by the analysis which learns a clause, and is only read by the clause database.
/// Lower glue generally indicates a more useful clause.
///
/// See [On the Glucose SAT Solver](https://dx.doi.org/10.1142/S0218213018400018) for an overview of the metric.
pub type Glue = u32;

/// The number of bits used to store glue within a clause record.
pub const GLUE_BITS: u32 = 22;

/// The greatest glue stored, larger glue is capped to this value.
pub const MAX_GLUE: Glue = (1 << GLUE_BITS) - 1;
