//! Errors reported by polynomial and power-series routines.

use thiserror::Error;

/// Errors that can occur in polynomial and series arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The divisor is the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,

    /// The constant term of a series to invert is zero.
    #[error("constant term is not invertible")]
    NotInvertible,

    /// An integer needed as a divisor vanishes in the coefficient field.
    #[error("{0} is zero in the coefficient field")]
    ZeroDivisor(u64),

    /// `log` was called on a series whose constant term is not one.
    #[error("logarithm needs constant term 1")]
    LogConstantTerm,

    /// `exp` was called on a series whose constant term is not zero.
    #[error("exponential needs constant term 0")]
    ExpConstantTerm,

    /// Interpolation through no points.
    #[error("interpolation needs at least one point")]
    EmptyInterpolation,

    /// Node and value lists differ in length.
    #[error("{points} nodes but {values} values")]
    LengthMismatch {
        /// Number of nodes.
        points: usize,
        /// Number of values.
        values: usize,
    },

    /// Two interpolation nodes coincide.
    #[error("interpolation node {index} is repeated")]
    DuplicateNode {
        /// Smallest index whose node equals an earlier one.
        index: usize,
    },
}
