//! # vellum-rings
//!
//! Algebraic structures for the polynomial kernels.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`
//! - Prime fields: `Ring`/`Field` for `ModInt<P>`
//! - The nimbers: the field of order `2^64` under nim-sum and nim-product
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── Field
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod nimber;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use finite_field::GF2;
pub use nimber::{nim_mul, nim_pow, nim_square, Nimber};
pub use traits::{Field, Ring};
