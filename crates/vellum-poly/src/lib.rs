//! # vellum-poly
//!
//! Fast univariate polynomial arithmetic over fields.
//!
//! This crate provides:
//! - A power-of-two transform engine (`FftPlan`) for both NTT and complex FFT
//! - Real and arbitrary-modulus floating FFT multiplication
//! - Dense polynomials with ring operators, division and remainder
//! - Newton iteration for power-series inverses
//! - Multipoint evaluation and interpolation over a subproduct tree
//!
//! ## Algorithm Selection
//!
//! Multiplication dispatches on the coefficient field via [`Convolve`]:
//! - Operand length <= 32: Schoolbook O(n²)
//! - Prime fields whose `P - 1` has enough factors of two: NTT O(n log n)
//! - Everything else: Karatsuba O(n^1.58)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod convolve;
pub mod dense;
pub mod division;
pub mod error;
pub mod multipoint;

#[cfg(test)]
mod proptests;

pub use algorithms::fft::{multiply_mod, multiply_real};
pub use algorithms::ntt::{FftPlan, TransformScalar};
pub use convolve::Convolve;
pub use dense::DensePoly;
pub use error::PolyError;
pub use multipoint::{evaluate, interpolate, MultipointConfig, ProductTree};
