//! # vellum-integers
//!
//! Scalar types for transform-based polynomial arithmetic.
//!
//! This crate provides:
//! - Prime-field residues (`ModInt<P>`) with compile-time roots of unity
//! - A table of NTT-friendly primes
//! - Double-precision complex numbers (`Complex`) for the floating FFT
//!
//! ## Choosing a modulus
//!
//! A transform of length `n` over `ModInt<P>` needs `n | P - 1`, so the
//! usual choice is a prime of the form `c * 2^k + 1`. See [`modular::primes`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod complex;
pub mod modular;

#[cfg(test)]
mod proptests;

pub use complex::Complex;
pub use modular::{inverses_upto, primes, Mod998244353, ModInt};
