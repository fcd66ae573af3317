//! # vellum-series
//!
//! Truncated formal power series over a field.
//!
//! This crate provides:
//! - [`PowerSeries`]: coefficients known modulo `x^n`
//! - Inverse, logarithm, exponential and powers by Newton iteration
//! - A linear-time table of `1/i` for any field
//!
//! # Key algorithms
//!
//! - Inversion: Newton iteration `b <- b (2 - a b)`, NTT-accelerated over
//!   prime fields
//! - Log: `∫ a' / a`
//! - Exp: Newton iteration `b <- b (1 + a - log b)`
//! - Pow: `c^k x^(kp) exp(k log(unit))`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ops;
pub mod power_series;

#[cfg(test)]
mod proptests;

pub use ops::inverse_table;
pub use power_series::PowerSeries;
