//! Floating-point FFT multiplication.
//!
//! Two tricks on top of the complex transform:
//! - [`multiply_real`] packs both real inputs into one complex vector and
//!   needs only two transforms.
//! - [`multiply_mod`] multiplies modulo an arbitrary `m < 2^31` by splitting
//!   each coefficient into 15-bit halves, so every partial product stays
//!   small enough to round exactly.
//!
//! Rounding is exact while `(|a| + |b|) * max(|a|, |b|)` stays below about
//! `10^9` for [`multiply_real`] (in theory closer to `10^6`), and for
//! [`multiply_mod`] up to lengths around `10^6`.

use vellum_integers::Complex;

use crate::algorithms::ntt::FftPlan;

const SPLIT_BITS: u32 = 15;
const SPLIT_MASK: u32 = (1 << SPLIT_BITS) - 1;

/// Multiplies two real polynomials.
///
/// `a` goes in the real part and `b` in the imaginary part of a single
/// vector; after squaring its transform, `a * b` sits in the imaginary part
/// of `F[-i] - conj(F[i])`, transformed once more.
#[must_use]
pub fn multiply_real(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let s = a.len() + b.len() - 1;
    let n = s.next_power_of_two();
    let mut plan = FftPlan::<Complex>::with_capacity(n.max(2));

    let mut fa = vec![Complex::ZERO; n];
    for (x, &v) in fa.iter_mut().zip(a) {
        x.re = v;
    }
    for (x, &v) in fa.iter_mut().zip(b) {
        x.im = v;
    }
    plan.fft(&mut fa);
    for x in &mut fa {
        *x = *x * *x;
    }

    let mask = n - 1;
    let mut fb: Vec<Complex> = (0..n)
        .map(|i| fa[n.wrapping_sub(i) & mask] - fa[i].conj())
        .collect();
    plan.fft(&mut fb);

    let scale = 1.0 / (4.0 * n as f64);
    fb[..s].iter().map(|z| z.im * scale).collect()
}

/// Multiplies two polynomials modulo `m`.
///
/// Works for any `m < 2^31`, prime or not. Coefficients must already be
/// reduced below `m`.
///
/// # Panics
///
/// Panics if `m` is zero or not below `2^31`.
#[must_use]
pub fn multiply_mod(a: &[u32], b: &[u32], m: u32) -> Vec<u32> {
    assert!(m > 0 && m < 1 << 31, "modulus {m} out of range");
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let s = a.len() + b.len() - 1;
    let n = s.next_power_of_two();
    let mut plan = FftPlan::<Complex>::with_capacity(n.max(2));

    let split = |v: &u32| Complex::new(f64::from(v & SPLIT_MASK), f64::from(v >> SPLIT_BITS));
    let mut fa: Vec<Complex> = a.iter().map(split).collect();
    fa.resize(n, Complex::ZERO);
    let mut fb: Vec<Complex> = b.iter().map(split).collect();
    fb.resize(n, Complex::ZERO);

    plan.fft(&mut fa);
    plan.fft(&mut fb);

    // Separate b's low and high halves (g0, g1) from its packed transform,
    // multiply them into a's transform, and swap i <-> -i so the following
    // forward transform acts as an inverse.
    let r0 = 0.5 / n as f64;
    let mask = n - 1;
    for i in 0..=n / 2 {
        let j = n.wrapping_sub(i) & mask;
        let g0 = (fb[i] + fb[j].conj()) * r0;
        let g1 = (fb[i] - fb[j].conj()) * r0;
        let g1 = Complex::new(g1.im, -g1.re);
        if j != i {
            fa.swap(i, j);
            fb[j] = fa[j] * g1;
            fa[j] = fa[j] * g0;
        }
        fb[i] = fa[i] * g1.conj();
        fa[i] = fa[i] * g0.conj();
    }
    plan.fft(&mut fa);
    plan.fft(&mut fb);

    let m64 = i64::from(m);
    let round = |x: f64| (x.round() as i64).rem_euclid(m64);
    (0..s)
        .map(|i| {
            let lo = round(fa[i].re);
            let mid = (round(fa[i].im) + round(fb[i].re)) % m64;
            let hi = round(fb[i].im);
            let r = (lo + (mid << SPLIT_BITS) % m64 + ((hi << SPLIT_BITS) % m64 << SPLIT_BITS)) % m64;
            // r < m < 2^31
            r as u32
        })
        .collect()
}
