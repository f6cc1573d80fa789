use thiserror::Error;

/// Errors raised when position arithmetic or an output sink cannot honor a request.
///
/// Capability mismatches (sorting a forward-only range, reversing a
/// single-pass one) are rejected at compile time by the range traits; this
/// type only covers what can go wrong with valid types at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    /// A negative step was requested through an interface that only moves forward.
    #[error("can't advance a position by a negative amount")]
    BackwardAdvance,

    /// A step would move a position past the edge of its range.
    #[error("requested {requested} steps but only {available} are available")]
    OutOfBounds {
        /// Number of steps asked for.
        requested: usize,
        /// Number of steps that were possible.
        available: usize,
    },

    /// An output range has no room left for another element.
    #[error("output range is exhausted")]
    OutputExhausted,
}
