//! Truncated formal power series.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use vellum_poly::{Convolve, DensePoly};
use vellum_rings::traits::Ring;

/// A power series known modulo `x^n`.
///
/// Stores exactly `n` coefficients (the precision), lowest degree first.
/// Unlike [`DensePoly`], trailing zeros are kept: they are known terms.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PowerSeries<R: Ring> {
    coeffs: Vec<R>,
}

impl<R: Ring> PowerSeries<R> {
    /// Creates a series from its first `coeffs.len()` coefficients.
    #[must_use]
    pub fn from_coeffs(coeffs: Vec<R>) -> Self {
        Self { coeffs }
    }

    /// The zero series to precision `n`.
    #[must_use]
    pub fn zero(n: usize) -> Self {
        Self {
            coeffs: vec![R::zero(); n],
        }
    }

    /// The series 1 to precision `n`.
    #[must_use]
    pub fn one(n: usize) -> Self {
        Self::constant(R::one(), n)
    }

    /// The constant series `c` to precision `n`.
    #[must_use]
    pub fn constant(c: R, n: usize) -> Self {
        let mut s = Self::zero(n);
        if let Some(c0) = s.coeffs.first_mut() {
            *c0 = c;
        }
        s
    }

    /// The series of a polynomial to precision `n`.
    #[must_use]
    pub fn from_poly(p: &DensePoly<R>, n: usize) -> Self {
        Self {
            coeffs: (0..n).map(|i| p.coeff(i)).collect(),
        }
    }

    /// Forgets the precision.
    #[must_use]
    pub fn into_poly(self) -> DensePoly<R> {
        DensePoly::new(self.coeffs)
    }

    /// Number of known coefficients.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns the known coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Consumes the series and returns its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<R> {
        self.coeffs
    }

    /// Returns the coefficient of `x^i`, or zero past the precision.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Lowers the precision to `min(n, precision)`.
    #[must_use]
    pub fn truncate(&self, n: usize) -> Self {
        Self {
            coeffs: self.coeffs[..n.min(self.coeffs.len())].to_vec(),
        }
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|x| x.clone() * c.clone()).collect(),
        }
    }

    /// Formal derivative, one coefficient shorter.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self {
            coeffs: self
                .coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c.clone() * R::from_u64(i as u64))
                .collect(),
        }
    }

    /// Index of the first non-zero coefficient, if any.
    #[must_use]
    pub fn valuation(&self) -> Option<usize> {
        self.coeffs.iter().position(|c| !c.is_zero())
    }
}

impl<R: Ring> Add<&PowerSeries<R>> for &PowerSeries<R> {
    type Output = PowerSeries<R>;

    fn add(self, rhs: &PowerSeries<R>) -> PowerSeries<R> {
        PowerSeries {
            coeffs: self
                .coeffs
                .iter()
                .zip(&rhs.coeffs)
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
        }
    }
}

impl<R: Ring> Sub<&PowerSeries<R>> for &PowerSeries<R> {
    type Output = PowerSeries<R>;

    fn sub(self, rhs: &PowerSeries<R>) -> PowerSeries<R> {
        PowerSeries {
            coeffs: self
                .coeffs
                .iter()
                .zip(&rhs.coeffs)
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
        }
    }
}

impl<R: Ring> Neg for &PowerSeries<R> {
    type Output = PowerSeries<R>;

    fn neg(self) -> PowerSeries<R> {
        PowerSeries {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }
}

impl<F: Convolve> Mul<&PowerSeries<F>> for &PowerSeries<F> {
    type Output = PowerSeries<F>;

    fn mul(self, rhs: &PowerSeries<F>) -> PowerSeries<F> {
        let n = self.precision().min(rhs.precision());
        let mut coeffs = F::convolve(&self.coeffs[..n], &rhs.coeffs[..n]);
        coeffs.truncate(n);
        PowerSeries { coeffs }
    }
}

impl<R: Ring> Add for PowerSeries<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<R: Ring> Sub for PowerSeries<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<R: Ring> Neg for PowerSeries<R> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl<F: Convolve> Mul for PowerSeries<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<R: Ring> fmt::Display for PowerSeries<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            match i {
                0 => write!(f, "{c:?} + ")?,
                1 => write!(f, "{c:?}*x + ")?,
                _ => write!(f, "{c:?}*x^{i} + ")?,
            }
        }
        write!(f, "O(x^{})", self.coeffs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_integers::ModInt;

    type F = ModInt<998_244_353>;

    fn series(values: &[u64]) -> PowerSeries<F> {
        PowerSeries::from_coeffs(values.iter().map(|&v| F::new(v)).collect())
    }

    #[test]
    fn test_constructors() {
        assert_eq!(PowerSeries::<F>::one(3), series(&[1, 0, 0]));
        assert_eq!(PowerSeries::<F>::one(0).precision(), 0);
        let p = DensePoly::new(vec![F::new(1), F::new(2), F::new(3)]);
        assert_eq!(PowerSeries::from_poly(&p, 2), series(&[1, 2]));
        assert_eq!(PowerSeries::from_poly(&p, 5), series(&[1, 2, 3, 0, 0]));
        assert_eq!(series(&[1, 2, 0]).into_poly(), DensePoly::new(vec![F::new(1), F::new(2)]));
    }

    #[test]
    fn test_precision_is_minimum() {
        let a = series(&[1, 2, 3, 4]);
        let b = series(&[5, 6]);
        assert_eq!(&a + &b, series(&[6, 8]));
        assert_eq!(&a * &b, series(&[5, 16]));
        assert_eq!((&a - &a).precision(), 4);
    }

    #[test]
    fn test_derivative() {
        assert_eq!(series(&[7, 1, 2, 3]).derivative(), series(&[1, 4, 9]));
        assert_eq!(series(&[]).derivative().precision(), 0);
    }

    #[test]
    fn test_coeff_and_valuation() {
        let a = series(&[0, 0, 5]);
        assert_eq!(a.coeff(2), F::new(5));
        assert_eq!(a.coeff(10), F::new(0));
        assert_eq!(a.valuation(), Some(2));
        assert_eq!(series(&[0, 0]).valuation(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(series(&[1, 0, 2]).to_string(), "1 (mod 998244353) + 2 (mod 998244353)*x^2 + O(x^3)");
    }
}
