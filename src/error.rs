//! Error types for the percolation model and its experiment driver.

use derive_more::{Display, Error, IsVariant};

/// Errors raised by [`Percolation`](crate::Percolation) and
/// [`PercolationStats`](crate::PercolationStats).
///
/// Both kinds are precondition failures: they are reported by the call that
/// violates them, before any state is touched.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum PercolationError {
    /// A size or count argument was zero, or too large to allocate.
    #[display("invalid argument: {name} must be a positive integer small enough to allocate, got {value}")]
    InvalidArgument { name: &'static str, value: usize },

    /// A 1-indexed coordinate fell outside `[1, n]`.
    #[display("index ({row}, {col}) out of bounds for a {n}x{n} grid")]
    IndexOutOfBounds { row: usize, col: usize, n: usize },
}

pub type Result<T> = std::result::Result<T, PercolationError>;
