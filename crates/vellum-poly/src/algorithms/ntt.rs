//! The transform engine shared by the NTT and the floating-point FFT.
//!
//! One iterative Cooley–Tukey routine serves both: it is generic over a
//! [`TransformScalar`], implemented by prime-field residues (exact NTT) and
//! by [`Complex`] (FFT over `f64`). An [`FftPlan`] owns the bit-reversal and
//! twiddle tables so repeated transforms reuse them.

use std::ops::{Add, Mul, Sub};

use tracing::trace;
use vellum_integers::{Complex, ModInt};

/// NTT-friendly prime: 998244353 = 119 * 2^23 + 1.
/// Supports transforms up to length 2^23.
pub const NTT_PRIME: u64 = 998_244_353;

/// Type alias for the default NTT field.
pub type NttField = ModInt<NTT_PRIME>;

/// A scalar a power-of-two transform can run over.
pub trait TransformScalar:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// Largest supported transform length.
    fn max_len() -> usize;

    /// The inverse of the transform length `n`.
    fn inv_len(n: usize) -> Self;

    /// Appends the twiddles of level `k` to a table of length `k`.
    ///
    /// After the call `rt[k + j]` is `w^j` for `j < k`, where `w` is a
    /// primitive `2k`-th root of unity.
    fn extend_roots(rt: &mut Vec<Self>, k: usize);
}

impl<const P: u64> TransformScalar for ModInt<P> {
    const ZERO: Self = ModInt::new(0);
    const ONE: Self = ModInt::new(1);

    fn max_len() -> usize {
        1usize
            .checked_shl(Self::TWO_ADICITY)
            .unwrap_or(1 << (usize::BITS - 1))
    }

    fn inv_len(n: usize) -> Self {
        // n divides P - 1, so it is a unit and Fermat applies.
        ModInt::new(n as u64).pow(P - 2)
    }

    /// # Panics
    ///
    /// Panics if `2k` exceeds `2^TWO_ADICITY`.
    fn extend_roots(rt: &mut Vec<Self>, k: usize) {
        let Some(z) = Self::root_of_unity(2 * k as u64) else {
            panic!(
                "transform length {} exceeds the 2-adic capacity 2^{} of modulus {P}",
                2 * k,
                Self::TWO_ADICITY
            );
        };
        rt.resize(2 * k, Self::ZERO);
        for i in k / 2..k {
            rt[2 * i] = rt[i];
            rt[2 * i + 1] = rt[i] * z;
        }
    }
}

impl TransformScalar for Complex {
    const ZERO: Self = Complex::ZERO;
    const ONE: Self = Complex::ONE;

    fn max_len() -> usize {
        1 << (usize::BITS - 1)
    }

    fn inv_len(n: usize) -> Self {
        Complex::new(1.0 / n as f64, 0.0)
    }

    /// Each root is computed directly rather than by repeated products,
    /// which keeps the rounding error independent of the level.
    fn extend_roots(rt: &mut Vec<Self>, k: usize) {
        let step = std::f64::consts::PI / k as f64;
        rt.extend((0..k).map(|j| Complex::from_polar(1.0, step * j as f64)));
    }
}

/// Cached tables for power-of-two transforms.
///
/// The tables only grow; a transform of length `n` reuses tables built for
/// any larger length.
#[derive(Clone, Debug)]
pub struct FftPlan<T> {
    rev: Vec<usize>,
    rt: Vec<T>,
}

impl<T: TransformScalar> Default for FftPlan<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TransformScalar> FftPlan<T> {
    /// Creates a plan with tables for lengths up to 2.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rev: vec![0, 1],
            rt: vec![T::ONE, T::ONE],
        }
    }

    /// Creates a plan with tables for lengths up to `n`.
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        let mut plan = Self::new();
        plan.reserve(n);
        plan
    }

    /// Returns the largest length the cached tables cover.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.rt.len()
    }

    /// Grows the tables to cover transforms of length `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not a power of two or exceeds [`TransformScalar::max_len`].
    pub fn reserve(&mut self, n: usize) {
        if n <= self.rt.len() {
            return;
        }
        assert!(n.is_power_of_two(), "transform length {n} is not a power of two");
        assert!(
            n <= T::max_len(),
            "transform length {n} exceeds the maximum {}",
            T::max_len()
        );
        trace!(from = self.rt.len(), to = n, "growing transform tables");

        self.rev.resize(n, 0);
        for i in 0..n {
            self.rev[i] = (self.rev[i >> 1] | ((i & 1) * n)) >> 1;
        }

        self.rt.reserve(n - self.rt.len());
        let mut k = self.rt.len();
        while k < n {
            T::extend_roots(&mut self.rt, k);
            k *= 2;
        }
    }

    /// Forward transform in place.
    ///
    /// On return `a[i] = Σ_j a_j w^(ij)` for the primitive `n`-th root `w`
    /// the scalar type provides.
    ///
    /// # Panics
    ///
    /// Panics if `a.len()` is not a power of two (zero is allowed) or is too
    /// long for the scalar type.
    pub fn fft(&mut self, a: &mut [T]) {
        let n = a.len();
        assert!(
            n == 0 || n.is_power_of_two(),
            "transform length {n} is not a power of two"
        );
        if n <= 1 {
            return;
        }
        self.reserve(n);

        let shift = (self.rev.len() / n).trailing_zeros();
        for i in 0..n {
            let j = self.rev[i] >> shift;
            if i < j {
                a.swap(i, j);
            }
        }

        let mut k = 1;
        while k < n {
            let roots = &self.rt[k..2 * k];
            for block in a.chunks_exact_mut(2 * k) {
                let (lo, hi) = block.split_at_mut(k);
                for ((x, y), &w) in lo.iter_mut().zip(hi.iter_mut()).zip(roots) {
                    let t = w * *y;
                    *y = *x - t;
                    *x = *x + t;
                }
            }
            k *= 2;
        }
    }

    /// Inverse transform in place: undoes [`FftPlan::fft`].
    ///
    /// # Panics
    ///
    /// Same conditions as [`FftPlan::fft`].
    pub fn ifft(&mut self, a: &mut [T]) {
        let n = a.len();
        if n <= 1 {
            return;
        }
        self.fft(a);
        a[1..].reverse();
        let d = T::inv_len(n);
        for x in a.iter_mut() {
            *x = *x * d;
        }
    }

    /// Multiplies two coefficient vectors (lowest degree first).
    ///
    /// Returns `a.len() + b.len() - 1` coefficients, or nothing if either
    /// input is empty.
    pub fn convolve(&mut self, a: &[T], b: &[T]) -> Vec<T> {
        if a.is_empty() || b.is_empty() {
            return Vec::new();
        }
        let s = a.len() + b.len() - 1;
        let n = s.next_power_of_two();

        let mut fa = Vec::with_capacity(n);
        fa.extend_from_slice(a);
        fa.resize(n, T::ZERO);
        let mut fb = Vec::with_capacity(n);
        fb.extend_from_slice(b);
        fb.resize(n, T::ZERO);

        self.fft(&mut fa);
        self.fft(&mut fb);
        let d = T::inv_len(n);
        for (x, &y) in fa.iter_mut().zip(&fb) {
            *x = *x * y * d;
        }
        fa[1..].reverse();
        self.fft(&mut fa);
        fa.truncate(s);
        fa
    }
}

/// Forward transform with a fresh plan.
pub fn fft<T: TransformScalar>(a: &mut [T]) {
    FftPlan::with_capacity(a.len().max(2)).fft(a);
}

/// Inverse transform with a fresh plan.
pub fn ifft<T: TransformScalar>(a: &mut [T]) {
    FftPlan::with_capacity(a.len().max(2)).ifft(a);
}

/// Multiplies two coefficient vectors with a fresh plan.
#[must_use]
pub fn convolve<T: TransformScalar>(a: &[T], b: &[T]) -> Vec<T> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let n = (a.len() + b.len() - 1).next_power_of_two();
    FftPlan::with_capacity(n.max(2)).convolve(a, b)
}

/// Multiplies two polynomials over the default NTT prime.
#[must_use]
pub fn ntt_multiply(a: &[NttField], b: &[NttField]) -> Vec<NttField> {
    convolve(a, b)
}

/// Largest transform length supported by `T`.
#[must_use]
pub fn max_len<T: TransformScalar>() -> usize {
    T::max_len()
}
