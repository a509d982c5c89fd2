//! Error kinds reported by table construction and queries.
//!
//! Every failure is deterministic input validation; nothing here is transient,
//! and no query ever returns a partial result alongside an error.
use thiserror::Error;

/// Reason a candidate data set was refused as the source for a table.
#[non_exhaustive]
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum SourceDataError {
    #[error("At least 2 axes are required, found {found}")]
    TooFewAxes { found: usize },
    #[error("Expected exactly {expected} axes, found {found}")]
    AxisCountMismatch { expected: usize, found: usize },
    #[error("Axis {axis} has no breakpoints")]
    EmptyAxis { axis: usize },
    #[error("Axis {axis} is not strictly increasing at breakpoint {position}")]
    NotIncreasing { axis: usize, position: usize },
    #[error("Expected {expected} dependent values (product of axis lengths), found {found}")]
    ValueCountMismatch { expected: usize, found: usize },
    #[error("Product of axis lengths overflows the addressable size")]
    GridTooLarge,
}

/// Errors from querying a [`Table`](crate::Table).
#[non_exhaustive]
#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum LookupError {
    #[error("Unable to operate on invalid table")]
    InvalidTable,
    #[error("Dimension mismatch: table has {expected} axes, query has {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Axis {axis} does not exist in a table with {ndims} axes")]
    NoSuchAxis { axis: usize, ndims: usize },
    #[error("Length mismatch: expected {expected} observations, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("Index {index} out of bounds for axis {axis} with {len} breakpoints")]
    IndexOutOfBounds { axis: usize, index: usize, len: usize },
    #[error("Value {value} outside of axis {axis} bounds [{lo}, {hi}]; extrapolation is not supported")]
    OutOfDomain { axis: usize, value: f64, lo: f64, hi: f64 },
    #[error("Malformed source data: {0}")]
    MalformedSourceData(#[from] SourceDataError),
    #[error("Calculated offset {offset} exceeds value count {len}")]
    OffsetOutOfRange { offset: usize, len: usize },
}
