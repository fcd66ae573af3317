//! Prime fields `Z/p` as rings.

use crate::traits::{Field, Ring};
use vellum_integers::ModInt;

impl<const P: u64> Ring for ModInt<P> {
    fn zero() -> Self {
        Self::new(0)
    }

    fn one() -> Self {
        Self::new(1)
    }

    fn is_zero(&self) -> bool {
        self.value() == 0
    }

    fn is_one(&self) -> bool {
        self.value() == 1
    }

    fn from_u64(n: u64) -> Self {
        Self::new(n)
    }

    fn pow(&self, n: u64) -> Self {
        ModInt::pow(*self, n)
    }
}

impl<const P: u64> Field for ModInt<P> {
    fn inv(&self) -> Option<Self> {
        ModInt::inv(*self)
    }
}

/// GF(2), the field with two elements.
pub type GF2 = ModInt<2>;
