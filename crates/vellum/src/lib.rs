//! # Vellum
//!
//! Fast polynomial, power-series and nim arithmetic.
//!
//! ## Features
//!
//! - **Transforms**: one cached power-of-two engine for NTT and complex FFT
//! - **Multiplication**: NTT over prime fields, real and arbitrary-modulus
//!   floating FFT, Karatsuba everywhere else
//! - **Polynomials**: ring operators, division with remainder, multipoint
//!   evaluation and interpolation
//! - **Power Series**: inverse, log, exp and pow by Newton iteration
//! - **Nimbers**: nim-product over 64-bit words
//! - **Permutations**: `O(n)` permutation <-> integer codes
//!
//! ## Quick Start
//!
//! ```rust
//! use vellum::prelude::*;
//!
//! type F = Mod998244353;
//!
//! let p = DensePoly::new(vec![F::new(1), F::new(1)]); // 1 + x
//! let q = p.pow(3);
//! assert_eq!(q.coeff(2), F::new(3));
//!
//! let s = PowerSeries::from_coeffs(vec![F::new(0), F::new(1), F::new(0)]);
//! let e = s.exp().unwrap(); // 1 + x + x^2/2
//! assert_eq!(e.coeff(2) * F::new(2), F::new(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use vellum_combinat as combinat;
pub use vellum_integers as integers;
pub use vellum_poly as poly;
pub use vellum_rings as rings;
pub use vellum_series as series;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use vellum_combinat::{int_to_perm, perm_to_int, CombinatError, Factorials};
    pub use vellum_integers::{Complex, Mod998244353, ModInt};
    pub use vellum_poly::{
        evaluate, interpolate, multiply_mod, multiply_real, Convolve, DensePoly, FftPlan, PolyError, ProductTree,
    };
    pub use vellum_rings::{nim_mul, Field, Nimber, Ring};
    pub use vellum_series::PowerSeries;
}
