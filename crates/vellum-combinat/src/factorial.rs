//! Factorial and inverse-factorial tables over a field.

use vellum_rings::traits::Field;

use crate::error::CombinatError;

/// Tables of `i!` and `1/i!` for `i <= n`.
#[derive(Clone, Debug)]
pub struct Factorials<F: Field> {
    fact: Vec<F>,
    inv_fact: Vec<F>,
}

impl<F: Field> Factorials<F> {
    /// Builds the tables with a single field inversion.
    ///
    /// # Errors
    ///
    /// Returns [`CombinatError::NotInvertible`] if `n!` is zero in `F`.
    pub fn new(n: usize) -> Result<Self, CombinatError> {
        let mut fact = Vec::with_capacity(n + 1);
        fact.push(F::one());
        let mut i_f = F::zero();
        for i in 1..=n {
            i_f = i_f + F::one();
            fact.push(fact[i - 1].clone() * i_f.clone());
        }

        let mut inv_fact = vec![F::zero(); n + 1];
        inv_fact[n] = fact[n].inv().ok_or(CombinatError::NotInvertible { n })?;
        for i in (1..=n).rev() {
            inv_fact[i - 1] = inv_fact[i].clone() * i_f.clone();
            i_f = i_f - F::one();
        }
        Ok(Self { fact, inv_fact })
    }

    /// Largest `n` covered by the tables.
    #[must_use]
    pub fn max(&self) -> usize {
        self.fact.len() - 1
    }

    /// `n!`.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`Factorials::max`].
    #[must_use]
    pub fn factorial(&self, n: usize) -> F {
        self.fact[n].clone()
    }

    /// `1/n!`.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`Factorials::max`].
    #[must_use]
    pub fn inv_factorial(&self, n: usize) -> F {
        self.inv_fact[n].clone()
    }

    /// `C(n, k)`, zero when `k > n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`Factorials::max`].
    #[must_use]
    pub fn binomial(&self, n: usize, k: usize) -> F {
        if k > n {
            return F::zero();
        }
        self.fact[n].clone() * self.inv_fact[k].clone() * self.inv_fact[n - k].clone()
    }

    /// `(k_1 + ... + k_m)! / (k_1! ... k_m!)`.
    ///
    /// # Panics
    ///
    /// Panics if the sum exceeds [`Factorials::max`].
    #[must_use]
    pub fn multinomial(&self, ks: &[usize]) -> F {
        let total: usize = ks.iter().sum();
        ks.iter()
            .fold(self.fact[total].clone(), |acc, &k| acc * self.inv_fact[k].clone())
    }
}
