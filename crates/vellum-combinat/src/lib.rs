//! # vellum-combinat
//!
//! Small combinatorial kernels.
//!
//! This crate provides:
//! - Permutation <-> integer codes in `O(n)` (not order preserving)
//! - Factorial, inverse-factorial, binomial and multinomial tables over any
//!   field

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod factorial;
pub mod permutation;

#[cfg(test)]
mod proptests;

pub use error::CombinatError;
pub use factorial::Factorials;
pub use permutation::{factorial_u64, int_to_perm, perm_to_int, MAX_LEN};
