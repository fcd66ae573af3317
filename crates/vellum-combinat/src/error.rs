//! Errors for permutation codes and factorial tables.

use thiserror::Error;

/// Errors that can occur in combinatorial routines.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CombinatError {
    /// An entry is not below the permutation length.
    #[error("value {value} out of range for a permutation of length {len}")]
    OutOfRange {
        /// The offending entry.
        value: usize,
        /// Length of the permutation.
        len: usize,
    },

    /// An entry occurs twice.
    #[error("value {value} occurs more than once")]
    Repeated {
        /// The repeated entry.
        value: usize,
    },

    /// Codes of permutations this long do not fit in a `u64`.
    #[error("permutations of length {len} do not fit in 64 bits (maximum {max})", max = crate::permutation::MAX_LEN)]
    TooLong {
        /// Requested length.
        len: usize,
    },

    /// A code is not below `len!`.
    #[error("code {code} is not below {len}!")]
    CodeOutOfRange {
        /// The offending code.
        code: u64,
        /// Permutation length.
        len: usize,
    },

    /// `n!` vanishes in the coefficient field.
    #[error("{n}! is zero in the coefficient field")]
    NotInvertible {
        /// Requested table size.
        n: usize,
    },
}
