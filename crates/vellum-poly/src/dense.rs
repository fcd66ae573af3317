//! Dense univariate polynomials.
//!
//! Arithmetic goes through the std operators. Multiplication and division
//! need a [`Convolve`] coefficient field so the product kernel can be
//! chosen per field; everything else works over any [`Ring`].

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use vellum_rings::traits::{Field, Ring};

use crate::convolve::Convolve;
use crate::error::PolyError;

/// A dense univariate polynomial.
///
/// Coefficients are stored in ascending degree order with no trailing
/// zeros, except that the zero polynomial is stored as `[0]`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DensePoly<R: Ring> {
    /// Coefficients in ascending degree order.
    coeffs: Vec<R>,
}

impl<R: Ring> DensePoly<R> {
    /// Creates a new polynomial from coefficients.
    #[must_use]
    pub fn new(mut coeffs: Vec<R>) -> Self {
        // Normalize: remove trailing zeros
        while coeffs.len() > 1 && coeffs.last().is_some_and(Ring::is_zero) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(R::zero());
        }

        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![R::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![R::one()],
        }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![R::zero(), R::one()])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: R, n: usize) -> Self {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Returns the degree of the polynomial (0 for the zero polynomial).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> &R {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Consumes the polynomial and returns its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<R> {
        self.coeffs
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut result = R::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        let result = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.clone() * R::from_u64(i as u64))
            .collect();
        Self::new(result)
    }

    /// Shifts the polynomial by multiplying by x^n.
    #[must_use]
    pub fn shift(&self, n: usize) -> Self {
        if self.is_zero() || n == 0 {
            return self.clone();
        }

        let mut coeffs = vec![R::zero(); n];
        coeffs.extend(self.coeffs.iter().cloned());
        Self::new(coeffs)
    }

    /// Reduces modulo x^n, keeping the terms of degree below `n`.
    #[must_use]
    pub fn truncate(&self, n: usize) -> Self {
        Self::new(self.coeffs[..n.min(self.coeffs.len())].to_vec())
    }

    /// Returns `x^(len - 1) * p(1/x)`: the first `len` coefficients in
    /// reverse order.
    ///
    /// Coefficients at or above `len` are dropped.
    #[must_use]
    pub fn reverse(&self, len: usize) -> Self {
        let mut coeffs: Vec<R> = (0..len).map(|i| self.coeff(i)).collect();
        coeffs.reverse();
        Self::new(coeffs)
    }
}

impl<F: Field> DensePoly<F> {
    /// Computes the antiderivative with zero constant term.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ZeroDivisor`] if some `i <= deg + 1` vanishes in
    /// the field (small characteristic).
    pub fn integral(&self) -> Result<Self, PolyError> {
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(F::zero());
        for (i, c) in self.coeffs.iter().enumerate() {
            let k = i as u64 + 1;
            let inv = F::from_u64(k).inv().ok_or(PolyError::ZeroDivisor(k))?;
            coeffs.push(c.clone() * inv);
        }
        Ok(Self::new(coeffs))
    }

    /// Divides every coefficient by the leading one.
    ///
    /// The zero polynomial is returned unchanged.
    #[must_use]
    pub fn monic(&self) -> Self {
        match self.leading_coeff().inv() {
            Some(inv) if !self.is_zero() => self.scale(&inv),
            _ => self.clone(),
        }
    }
}

impl<F: Convolve> DensePoly<F> {
    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }
        if n == 1 {
            return self.clone();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }

        result
    }
}

impl<R: Ring> fmt::Display for DensePoly<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let term = match i {
                0 => format!("{c:?}"),
                1 => format!("{c:?}*x"),
                _ => format!("{c:?}*x^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}

impl<R: Ring> Add<&DensePoly<R>> for &DensePoly<R> {
    type Output = DensePoly<R>;

    fn add(self, rhs: &DensePoly<R>) -> DensePoly<R> {
        let (long, short) = if self.coeffs.len() >= rhs.coeffs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut coeffs = long.coeffs.clone();
        for (c, s) in coeffs.iter_mut().zip(&short.coeffs) {
            *c = c.clone() + s.clone();
        }
        DensePoly::new(coeffs)
    }
}

impl<R: Ring> Sub<&DensePoly<R>> for &DensePoly<R> {
    type Output = DensePoly<R>;

    fn sub(self, rhs: &DensePoly<R>) -> DensePoly<R> {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len).map(|i| self.coeff(i) - rhs.coeff(i)).collect();
        DensePoly::new(coeffs)
    }
}

impl<F: Convolve> Mul<&DensePoly<F>> for &DensePoly<F> {
    type Output = DensePoly<F>;

    fn mul(self, rhs: &DensePoly<F>) -> DensePoly<F> {
        if self.is_zero() || rhs.is_zero() {
            return DensePoly::zero();
        }
        DensePoly::new(F::convolve(&self.coeffs, &rhs.coeffs))
    }
}

/// # Panics
///
/// Panics if `rhs` is the zero polynomial; see
/// [`DensePoly::checked_div_rem`].
impl<F: Convolve> Div<&DensePoly<F>> for &DensePoly<F> {
    type Output = DensePoly<F>;

    fn div(self, rhs: &DensePoly<F>) -> DensePoly<F> {
        match self.checked_div_rem(rhs) {
            Ok((q, _)) => q,
            Err(e) => panic!("{e}"),
        }
    }
}

/// # Panics
///
/// Panics if `rhs` is the zero polynomial; see
/// [`DensePoly::checked_div_rem`].
impl<F: Convolve> Rem<&DensePoly<F>> for &DensePoly<F> {
    type Output = DensePoly<F>;

    fn rem(self, rhs: &DensePoly<F>) -> DensePoly<F> {
        match self.checked_div_rem(rhs) {
            Ok((_, r)) => r,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<R: Ring> Neg for &DensePoly<R> {
    type Output = DensePoly<R>;

    fn neg(self) -> DensePoly<R> {
        DensePoly {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }
}

impl<R: Ring> Neg for DensePoly<R> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

/// Derives the by-value and assigning forms of a binary operator from its
/// `&a op &b` implementation.
macro_rules! forward_binop {
    ($bound:ident, $op:ident, $method:ident, $assign:ident, $assign_method:ident) => {
        impl<R: $bound> $op for DensePoly<R> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                (&self).$method(&rhs)
            }
        }

        impl<R: $bound> $op<&DensePoly<R>> for DensePoly<R> {
            type Output = Self;

            fn $method(self, rhs: &Self) -> Self {
                (&self).$method(rhs)
            }
        }

        impl<R: $bound> $assign<&DensePoly<R>> for DensePoly<R> {
            fn $assign_method(&mut self, rhs: &Self) {
                *self = (&*self).$method(rhs);
            }
        }

        impl<R: $bound> $assign for DensePoly<R> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = (&*self).$method(&rhs);
            }
        }
    };
}

forward_binop!(Ring, Add, add, AddAssign, add_assign);
forward_binop!(Ring, Sub, sub, SubAssign, sub_assign);
forward_binop!(Convolve, Mul, mul, MulAssign, mul_assign);
forward_binop!(Convolve, Div, div, DivAssign, div_assign);
forward_binop!(Convolve, Rem, rem, RemAssign, rem_assign);

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_integers::ModInt;
    use vellum_rings::Nimber;

    type F = ModInt<998_244_353>;

    fn poly(values: &[i64]) -> DensePoly<F> {
        DensePoly::new(values.iter().map(|&v| F::from_signed(v)).collect())
    }

    #[test]
    fn test_normalization() {
        assert_eq!(poly(&[1, 2, 0, 0]).coeffs().len(), 2);
        assert!(poly(&[]).is_zero());
        assert!(poly(&[0, 0]).is_zero());
        assert_eq!(poly(&[0, 0]), DensePoly::zero());
        assert_eq!(DensePoly::<F>::zero().degree(), 0);
    }

    #[test]
    fn test_basic_ops() {
        let p = poly(&[1, 2]); // 1 + 2x
        let q = poly(&[3, 4]); // 3 + 4x

        assert_eq!(&p + &q, poly(&[4, 6]));
        assert_eq!(&p - &q, poly(&[-2, -2]));
        assert_eq!(-&p, poly(&[-1, -2]));
        assert!((&p - &p).is_zero());
    }

    #[test]
    fn test_sub_cancels_leading_terms() {
        let p = poly(&[1, 2, 3]);
        let q = poly(&[0, 0, 3]);
        let d = p - q;
        assert_eq!(d.degree(), 1);
    }

    #[test]
    fn test_mul() {
        // (1 + 2x)(3 + 4x) = 3 + 10x + 8x^2
        let p = poly(&[1, 2]);
        let q = poly(&[3, 4]);
        assert_eq!(&p * &q, poly(&[3, 10, 8]));
        assert!((&p * &DensePoly::zero()).is_zero());

        let mut r = p.clone();
        r *= &q;
        r += &p;
        assert_eq!(r, poly(&[4, 12, 8]));
    }

    #[test]
    fn test_large_mul_matches_schoolbook() {
        let p = DensePoly::new((0..300).map(|i| F::new(i * 31 + 7)).collect());
        let q = DensePoly::new((0..200).map(|i| F::new(i ^ 0x55)).collect());
        let expected = crate::algorithms::karatsuba::schoolbook_mul(p.coeffs(), q.coeffs());
        assert_eq!((&p * &q).into_coeffs(), expected);
    }

    #[test]
    fn test_eval() {
        // p(x) = 1 + 2x + 3x^2, p(2) = 17
        let p = poly(&[1, 2, 3]);
        assert_eq!(p.eval(&F::new(2)), F::new(17));
    }

    #[test]
    fn test_derivative_and_integral() {
        let p = poly(&[5, 3, 0, 4]); // 5 + 3x + 4x^3
        assert_eq!(p.derivative(), poly(&[3, 0, 12]));
        assert_eq!(p.derivative().integral().unwrap(), poly(&[0, 3, 0, 4]));
        assert!(DensePoly::<F>::constant(F::new(9)).derivative().is_zero());
    }

    #[test]
    fn test_integral_small_characteristic() {
        // In GF(3) the coefficient of x^2 would need 1/3.
        let p = DensePoly::new(vec![ModInt::<3>::new(1), ModInt::new(1), ModInt::new(1)]);
        assert_eq!(p.integral(), Err(PolyError::ZeroDivisor(3)));
    }

    #[test]
    fn test_shift_truncate_reverse() {
        let p = poly(&[1, 2, 3]);
        assert_eq!(p.shift(2), poly(&[0, 0, 1, 2, 3]));
        assert_eq!(p.truncate(2), poly(&[1, 2]));
        assert_eq!(p.truncate(10), p);
        assert_eq!(p.reverse(3), poly(&[3, 2, 1]));
        assert_eq!(p.reverse(5), poly(&[0, 0, 3, 2, 1]));
        assert_eq!(p.reverse(2), poly(&[2, 1]));
    }

    #[test]
    fn test_pow() {
        let p = poly(&[1, 1]);
        assert_eq!(p.pow(0), DensePoly::one());
        assert_eq!(p.pow(4), poly(&[1, 4, 6, 4, 1]));
    }

    #[test]
    fn test_monic() {
        let p = poly(&[2, 4]);
        assert_eq!(p.monic(), DensePoly::new(vec![F::new(2) / F::new(4), F::new(1)]));
        assert!(DensePoly::<F>::zero().monic().is_zero());
    }

    #[test]
    fn test_nimber_coefficients() {
        // (x + *2)^2 = x^2 + *3 in characteristic 2.
        let p = DensePoly::new(vec![Nimber(2), Nimber(1)]);
        assert_eq!(p.pow(2), DensePoly::new(vec![Nimber(3), Nimber(0), Nimber(1)]));
    }

    #[test]
    fn test_display() {
        assert_eq!(DensePoly::<F>::zero().to_string(), "0");
        let p = DensePoly::new(vec![Nimber(1), Nimber(0), Nimber(5)]);
        assert_eq!(p.to_string(), "*1 + *5*x^2");
    }
}
