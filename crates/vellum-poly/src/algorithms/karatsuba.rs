//! Schoolbook and Karatsuba multiplication.
//!
//! These work over any [`Ring`], so they back the transform for rings that
//! have no suitable roots of unity (nimbers, small primes) and for products
//! too short to be worth a transform.

use vellum_rings::traits::Ring;

/// Below this operand length Karatsuba falls back to schoolbook.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Schoolbook multiplication: O(nm).
///
/// Returns `a.len() + b.len() - 1` coefficients, or nothing if either input
/// is empty.
#[must_use]
pub fn schoolbook_mul<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![R::zero(); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        for (slot, y) in result[i..].iter_mut().zip(b) {
            *slot = slot.clone() + x.clone() * y.clone();
        }
    }
    result
}

/// Karatsuba multiplication: O(n^1.58).
///
/// Same output shape as [`schoolbook_mul`]. Unbalanced operands are cut
/// into pieces the size of the shorter one.
#[must_use]
pub fn karatsuba_mul<R: Ring>(a: &[R], b: &[R]) -> Vec<R> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    if a.len().min(b.len()) < KARATSUBA_THRESHOLD {
        return schoolbook_mul(a, b);
    }

    let half = a.len().max(b.len()).div_ceil(2);
    let mut result = vec![R::zero(); a.len() + b.len() - 1];

    // One operand fits in the low half: a * b = a0 * b + (a1 * b) x^half.
    if a.len() <= half || b.len() <= half {
        let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
        let (lo, hi) = long.split_at(half.min(long.len()));
        add_at(&mut result, 0, &karatsuba_mul(lo, short));
        add_at(&mut result, lo.len(), &karatsuba_mul(hi, short));
        return result;
    }

    let (a0, a1) = a.split_at(half);
    let (b0, b1) = b.split_at(half);

    let z0 = karatsuba_mul(a0, b0);
    let z2 = karatsuba_mul(a1, b1);
    let mut z1 = karatsuba_mul(&sum(a0, a1), &sum(b0, b1));
    sub_at(&mut z1, &z0);
    sub_at(&mut z1, &z2);

    add_at(&mut result, 0, &z0);
    add_at(&mut result, half, &z1);
    add_at(&mut result, 2 * half, &z2);
    result
}

/// Coefficient-wise sum of two slices of possibly different lengths.
fn sum<R: Ring>(x: &[R], y: &[R]) -> Vec<R> {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    let mut out = long.to_vec();
    for (o, s) in out.iter_mut().zip(short) {
        *o = o.clone() + s.clone();
    }
    out
}

/// `dst[offset + i] += src[i]`, ignoring terms past the end of `dst`.
fn add_at<R: Ring>(dst: &mut [R], offset: usize, src: &[R]) {
    let start = offset.min(dst.len());
    for (d, s) in dst[start..].iter_mut().zip(src) {
        *d = d.clone() + s.clone();
    }
}

/// `dst[i] -= src[i]`.
fn sub_at<R: Ring>(dst: &mut [R], src: &[R]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d = d.clone() - s.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_integers::ModInt;
    use vellum_rings::Nimber;

    type F = ModInt<1_000_000_007>;

    fn f(values: &[u64]) -> Vec<F> {
        values.iter().map(|&v| F::new(v)).collect()
    }

    #[test]
    fn test_schoolbook() {
        // (1 + 2x)(3 + 4x) = 3 + 10x + 8x^2
        assert_eq!(schoolbook_mul(&f(&[1, 2]), &f(&[3, 4])), f(&[3, 10, 8]));
        assert!(schoolbook_mul(&f(&[]), &f(&[3, 4])).is_empty());
    }

    #[test]
    fn test_karatsuba_small() {
        assert_eq!(karatsuba_mul(&f(&[1, 2]), &f(&[3, 4])), f(&[3, 10, 8]));
    }

    #[test]
    fn test_karatsuba_large() {
        let a: Vec<F> = (0..100).map(F::new).collect();
        let b: Vec<F> = (0..100).map(|i| F::new(100 - i)).collect();
        assert_eq!(karatsuba_mul(&a, &b), schoolbook_mul(&a, &b));
    }

    #[test]
    fn test_karatsuba_unbalanced() {
        let a: Vec<F> = (0..257).map(|i| F::new(i * i + 1)).collect();
        let b: Vec<F> = (0..40).map(|i| F::new(3 * i + 7)).collect();
        assert_eq!(karatsuba_mul(&a, &b), schoolbook_mul(&a, &b));
        assert_eq!(karatsuba_mul(&b, &a), schoolbook_mul(&a, &b));
    }

    #[test]
    fn test_karatsuba_nimbers() {
        let a: Vec<Nimber> = (0..70u64).map(|i| Nimber(i.wrapping_mul(0x9e37_79b9_7f4a_7c15))).collect();
        let b: Vec<Nimber> = (0..45u64).map(|i| Nimber(i ^ 0xff)).collect();
        assert_eq!(karatsuba_mul(&a, &b), schoolbook_mul(&a, &b));
    }
}
