//! Algebraic structure traits.
//!
//! Polynomial and power-series code is written against these traits so the
//! same routines run over prime fields, the nimbers, or any other ring a
//! caller plugs in.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative and commutative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// The image of the integer `n` under the canonical map `Z -> R`.
    ///
    /// The default uses double-and-add, so it costs `O(log n)` ring
    /// operations; rings with a cheaper embedding override it.
    fn from_u64(n: u64) -> Self {
        let mut result = Self::zero();
        let mut base = Self::one();
        let mut n = n;
        while n > 0 {
            if n & 1 == 1 {
                result = result + base.clone();
            }
            base = base.clone() + base;
            n >>= 1;
        }
        result
    }

    /// Computes `self^n` by binary exponentiation.
    fn pow(&self, n: u64) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A field: a ring where every non-zero element has a multiplicative inverse.
pub trait Field: Ring {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;

    /// Divides by another element.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn field_div(&self, other: &Self) -> Self {
        self.clone() * other.inv().expect("division by zero")
    }
}
