//! Newton-iteration operations on power series: inverse, log, exp, pow.
//!
//! All of them are quasi-linear when the coefficient field multiplies via
//! the NTT, and fall back to Karatsuba-based Newton steps otherwise.

use tracing::trace;
use vellum_poly::{Convolve, PolyError};
use vellum_rings::traits::Field;

use crate::power_series::PowerSeries;

/// Returns `[0, 1/1, 1/2, ..., 1/n]` in any field.
///
/// Batch inversion: one field inverse plus `3n` multiplications.
///
/// # Errors
///
/// Returns [`PolyError::ZeroDivisor`] with the first `i <= n` that is zero
/// in the field.
pub fn inverse_table<F: Field>(n: usize) -> Result<Vec<F>, PolyError> {
    let mut values = Vec::with_capacity(n + 1);
    let mut prefix = Vec::with_capacity(n + 1);
    values.push(F::zero());
    prefix.push(F::one());
    for i in 1..=n {
        let v = values[i - 1].clone() + F::one();
        if v.is_zero() {
            return Err(PolyError::ZeroDivisor(i as u64));
        }
        prefix.push(prefix[i - 1].clone() * v.clone());
        values.push(v);
    }

    let mut acc = prefix[n].inv().ok_or(PolyError::ZeroDivisor(n as u64))?;
    let mut inv = vec![F::zero(); n + 1];
    for i in (1..=n).rev() {
        inv[i] = acc.clone() * prefix[i - 1].clone();
        acc = acc * values[i].clone();
    }
    Ok(inv)
}

impl<F: Convolve> PowerSeries<F> {
    /// Formal antiderivative with zero constant term, one coefficient longer.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ZeroDivisor`] if some `i <= precision` is zero in
    /// the field.
    pub fn integral(&self) -> Result<Self, PolyError> {
        let inv = inverse_table::<F>(self.precision())?;
        let mut coeffs = Vec::with_capacity(self.precision() + 1);
        coeffs.push(F::zero());
        coeffs.extend(
            self.coeffs()
                .iter()
                .zip(&inv[1..])
                .map(|(c, i)| c.clone() * i.clone()),
        );
        Ok(Self::from_coeffs(coeffs))
    }

    /// Multiplicative inverse to the same precision.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NotInvertible`] if the constant term is zero.
    pub fn inverse(&self) -> Result<Self, PolyError> {
        F::series_inverse(self.coeffs(), self.precision()).map(Self::from_coeffs)
    }

    /// Natural logarithm: `log a = ∫ a' / a`.
    ///
    /// # Errors
    ///
    /// - [`PolyError::LogConstantTerm`] unless the constant term is one
    /// - [`PolyError::ZeroDivisor`] if the characteristic is below the
    ///   precision
    pub fn log(&self) -> Result<Self, PolyError> {
        let n = self.precision();
        if n == 0 {
            return Ok(Self::zero(0));
        }
        if !self.coeff(0).is_one() {
            return Err(PolyError::LogConstantTerm);
        }

        let inv = F::series_inverse(self.coeffs(), n - 1)?;
        let mut quotient = F::convolve(self.derivative().coeffs(), &inv);
        quotient.resize(n - 1, F::zero());
        Self::from_coeffs(quotient).integral()
    }

    /// Exponential, by the Newton step `b <- b (1 + a - log b)`.
    ///
    /// A series of precision zero yields the series 1 of precision one.
    ///
    /// # Errors
    ///
    /// - [`PolyError::ExpConstantTerm`] unless the constant term is zero
    /// - [`PolyError::ZeroDivisor`] if the characteristic is below the
    ///   precision
    pub fn exp(&self) -> Result<Self, PolyError> {
        let n = self.precision();
        if n == 0 {
            return Ok(Self::one(1));
        }
        if !self.coeff(0).is_zero() {
            return Err(PolyError::ExpConstantTerm);
        }

        let mut b = vec![F::one()];
        while b.len() < n {
            let m = (2 * b.len()).min(n);
            b.resize(m, F::zero());
            let log_b = Self::from_coeffs(b.clone()).log()?;

            let mut c: Vec<F> = (0..m).map(|i| self.coeff(i) - log_b.coeff(i)).collect();
            c[0] = c[0].clone() + F::one();

            b = F::convolve(&b, &c);
            b.truncate(m);
            trace!(precision = m, "exp newton step");
        }
        Ok(Self::from_coeffs(b))
    }

    /// Computes `self^k` to the same precision.
    ///
    /// Factors `self = c x^p (1 + ...)`, raises the unit part through
    /// `exp(k log)` and shifts by `k p`. `k = 0` gives 1, and so does `0^0`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ZeroDivisor`] if the characteristic is below the
    /// remaining precision.
    pub fn pow(&self, k: u64) -> Result<Self, PolyError> {
        let n = self.precision();
        if k == 0 {
            return Ok(Self::one(n));
        }
        let Some(p) = self.valuation() else {
            return Ok(Self::zero(n));
        };
        let shift = match (p as u64).checked_mul(k) {
            Some(s) if s < n as u64 => s as usize,
            _ => return Ok(Self::zero(n)),
        };

        let len = n - shift;
        let lead = self.coeff(p);
        let lead_inv = lead.inv().ok_or(PolyError::NotInvertible)?;
        let unit = Self::from_coeffs((p..p + len).map(|i| self.coeff(i) * lead_inv.clone()).collect());

        let powered = unit.log()?.scale(&F::from_u64(k)).exp()?;
        trace!(exponent = k, shift, "series power");

        let scale = lead.pow(k);
        let mut coeffs = vec![F::zero(); shift];
        coeffs.extend(powered.coeffs().iter().map(|c| c.clone() * scale.clone()));
        Ok(Self::from_coeffs(coeffs))
    }
}
