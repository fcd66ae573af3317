//! Multiplication strategy per coefficient field.
//!
//! [`Convolve`] is the seam between polynomial code and the multiplication
//! kernels. Prime fields route long products through the NTT when the
//! modulus supports the transform length; every other field, and every
//! product that is too short or too long for the transform, goes through
//! Karatsuba.

use vellum_integers::ModInt;
use vellum_rings::traits::Field;
use vellum_rings::Nimber;

use crate::algorithms::karatsuba::karatsuba_mul;
use crate::algorithms::newton;
use crate::algorithms::ntt::{self, TransformScalar};
use crate::error::PolyError;

/// Products with an operand at most this long skip the transform.
pub const SCHOOLBOOK_THRESHOLD: usize = 32;

/// A field with a multiplication kernel for coefficient vectors.
pub trait Convolve: Field {
    /// Multiplies two coefficient vectors (lowest degree first).
    ///
    /// Returns `a.len() + b.len() - 1` coefficients, or nothing if either
    /// input is empty.
    #[must_use]
    fn convolve(a: &[Self], b: &[Self]) -> Vec<Self> {
        karatsuba_mul(a, b)
    }

    /// Returns the first `n` coefficients of the power series `1 / a`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NotInvertible`] if the constant term of `a` is
    /// zero.
    fn series_inverse(a: &[Self], n: usize) -> Result<Vec<Self>, PolyError> {
        newton::inverse(a, n)
    }
}

impl<const P: u64> Convolve for ModInt<P> {
    fn convolve(a: &[Self], b: &[Self]) -> Vec<Self> {
        if a.is_empty() || b.is_empty() {
            return Vec::new();
        }
        let n = (a.len() + b.len() - 1).next_power_of_two();
        if a.len().min(b.len()) <= SCHOOLBOOK_THRESHOLD || n > Self::max_len() {
            karatsuba_mul(a, b)
        } else {
            ntt::convolve(a, b)
        }
    }

    fn series_inverse(a: &[Self], n: usize) -> Result<Vec<Self>, PolyError> {
        if 2 * n.next_power_of_two() <= Self::max_len() {
            newton::ntt_inverse(a, n)
        } else {
            newton::inverse(a, n)
        }
    }
}

impl Convolve for Nimber {}
