//! Polynomial division with remainder.
//!
//! Long quotients use the reversal identity: with `n = deg a`, `m = deg d`,
//! `rev(q) = rev(a) / rev(d) mod x^(n-m+1)`, and `rev(d)` has the leading
//! coefficient of `d` as its constant term, so one series inverse and two
//! products give the quotient. Short quotients use long division.

use tracing::trace;

use crate::convolve::Convolve;
use crate::dense::DensePoly;
use crate::error::PolyError;

/// Quotients shorter than this use long division.
pub const LONG_DIVISION_THRESHOLD: usize = 32;

impl<F: Convolve> DensePoly<F> {
    /// Computes `(q, r)` with `self = q * divisor + r` and
    /// `deg r < deg divisor` (or `r = 0`).
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolyError> {
        if divisor.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        if self.is_zero() || self.degree() < divisor.degree() {
            return Ok((Self::zero(), self.clone()));
        }

        let quotient_len = self.degree() - divisor.degree() + 1;
        if quotient_len < LONG_DIVISION_THRESHOLD || divisor.degree() < LONG_DIVISION_THRESHOLD {
            self.long_div_rem(divisor)
        } else {
            self.fast_div_rem(divisor, quotient_len)
        }
    }

    /// Quotient only.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, PolyError> {
        self.checked_div_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder only.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self, PolyError> {
        self.checked_div_rem(divisor).map(|(_, r)| r)
    }

    fn long_div_rem(&self, divisor: &Self) -> Result<(Self, Self), PolyError> {
        let d = divisor.coeffs();
        let m = d.len();
        let lc_inv = divisor.leading_coeff().inv().ok_or(PolyError::DivisionByZero)?;

        let mut rem = self.coeffs().to_vec();
        let mut quotient = vec![F::zero(); rem.len() - m + 1];
        for k in (0..quotient.len()).rev() {
            let c = rem[k + m - 1].clone() * lc_inv.clone();
            if c.is_zero() {
                continue;
            }
            for (r, dj) in rem[k..k + m].iter_mut().zip(d) {
                *r = r.clone() - c.clone() * dj.clone();
            }
            quotient[k] = c;
        }

        rem.truncate(m - 1);
        Ok((Self::new(quotient), Self::new(rem)))
    }

    fn fast_div_rem(&self, divisor: &Self, quotient_len: usize) -> Result<(Self, Self), PolyError> {
        trace!(
            dividend = self.degree(),
            divisor = divisor.degree(),
            "division by series inverse"
        );
        let a_rev: Vec<F> = self.coeffs().iter().rev().take(quotient_len).cloned().collect();
        let d_rev: Vec<F> = divisor.coeffs().iter().rev().take(quotient_len).cloned().collect();

        let d_inv = F::series_inverse(&d_rev, quotient_len)?;
        let mut q = F::convolve(&a_rev, &d_inv);
        q.truncate(quotient_len);
        q.reverse();
        let quotient = Self::new(q);

        let m = divisor.coeffs().len();
        let product = &quotient * divisor;
        let rem = (0..m - 1).map(|i| self.coeff(i) - product.coeff(i)).collect();
        Ok((quotient, Self::new(rem)))
    }
}
