//! Newton iteration for power-series inverses.
//!
//! If `b` inverts `a` to `m` terms then `b (2 - a b)` inverts it to `2m`
//! terms, so `log n` doublings reach any precision.

use tracing::trace;
use vellum_integers::ModInt;
use vellum_rings::traits::Field;

use crate::algorithms::ntt::{FftPlan, TransformScalar};
use crate::convolve::Convolve;
use crate::error::PolyError;

/// Returns the first `n` coefficients of `1 / a`.
///
/// Works over any field through [`Convolve::convolve`]. Missing
/// coefficients of `a` are zero.
///
/// # Errors
///
/// Returns [`PolyError::NotInvertible`] if `a[0]` is zero or `a` is empty
/// (and `n > 0`).
pub fn inverse<F: Convolve>(a: &[F], n: usize) -> Result<Vec<F>, PolyError> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let b0 = a
        .first()
        .and_then(Field::inv)
        .ok_or(PolyError::NotInvertible)?;

    let two = F::one() + F::one();
    let mut b = vec![b0];
    while b.len() < n {
        let m = (2 * b.len()).min(n);
        let mut e = F::convolve(&a[..m.min(a.len())], &b);
        e.resize(m, F::zero());
        for x in &mut e {
            *x = -x.clone();
        }
        e[0] = e[0].clone() + two.clone();

        b = F::convolve(&b, &e);
        b.truncate(m);
        trace!(precision = m, "newton inverse step");
    }
    Ok(b)
}

/// NTT-based inverse over a prime field.
///
/// Each doubling step costs three transforms of length `2m`: both operands
/// are transformed once and `b (2 - a b)` is formed pointwise, since its
/// true degree stays below `4m` and the wrap-around only disturbs
/// coefficients past the new precision.
///
/// # Errors
///
/// Returns [`PolyError::NotInvertible`] if `a[0]` is zero or `a` is empty
/// (and `n > 0`).
///
/// # Panics
///
/// Panics if `2 * n.next_power_of_two()` exceeds the transform capacity of
/// `P`.
pub fn ntt_inverse<const P: u64>(a: &[ModInt<P>], n: usize) -> Result<Vec<ModInt<P>>, PolyError> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let b0 = a
        .first()
        .and_then(|a0| a0.inv())
        .ok_or(PolyError::NotInvertible)?;

    let target = n.next_power_of_two();
    let mut plan = FftPlan::with_capacity((2 * target).max(2));
    let two = ModInt::<P>::new(2);

    let mut b = Vec::with_capacity(2 * target);
    b.push(b0);
    let mut fa = Vec::with_capacity(2 * target);

    while b.len() < n {
        let m = 2 * b.len();
        b.resize(2 * m, ModInt::<P>::ZERO);
        fa.clear();
        fa.extend_from_slice(&a[..m.min(a.len())]);
        fa.resize(2 * m, ModInt::<P>::ZERO);

        plan.fft(&mut b);
        plan.fft(&mut fa);
        let d = ModInt::<P>::inv_len(2 * m);
        for (x, &y) in b.iter_mut().zip(&fa) {
            *x = *x * (two - y * *x) * d;
        }
        b[1..].reverse();
        plan.fft(&mut b);
        b.truncate(m);
        trace!(precision = m, "ntt inverse step");
    }

    b.truncate(n);
    Ok(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::karatsuba::schoolbook_mul;
    use vellum_rings::Nimber;

    type F = ModInt<998_244_353>;

    fn is_inverse<T: Convolve>(a: &[T], b: &[T], n: usize) -> bool {
        let mut padded = a.to_vec();
        padded.resize(n, T::zero());
        let prod = schoolbook_mul(&padded, b);
        (0..n).all(|i| if i == 0 { prod[i].is_one() } else { prod[i].is_zero() })
    }

    #[test]
    fn test_inverse_of_one_minus_x() {
        // 1 / (1 - x) = 1 + x + x^2 + ...
        let a = vec![F::new(1), -F::new(1)];
        let b = inverse(&a, 10).unwrap();
        assert_eq!(b, vec![F::new(1); 10]);
        assert_eq!(ntt_inverse(&a, 10).unwrap(), b);
    }

    #[test]
    fn test_generic_and_ntt_agree() {
        let a: Vec<F> = (0..50).map(|i| F::new(i * i + 3)).collect();
        for n in [1, 2, 3, 7, 16, 33, 100] {
            let g = inverse(&a, n).unwrap();
            let t = ntt_inverse(&a, n).unwrap();
            assert_eq!(g.len(), n);
            assert_eq!(g, t, "length {n}");
            assert!(is_inverse(&a, &g, n));
        }
    }

    #[test]
    fn test_nimber_inverse() {
        let a: Vec<Nimber> = (1..20u64).map(|i| Nimber(i * 0x1357)).collect();
        let b = inverse(&a, 25).unwrap();
        assert!(is_inverse(&a, &b, 25));
    }

    #[test]
    fn test_constant_input() {
        let b = inverse(&[Nimber(3)], 4).unwrap();
        assert_eq!(b.len(), 4);
        assert_eq!(b[0] * Nimber(3), Nimber(1));
        assert!(b[1..].iter().all(|&x| x == Nimber(0)));

        type Small = ModInt<13>;
        let b = inverse(&[Small::new(2)], 20).unwrap();
        assert_eq!(b.len(), 20);
        assert_eq!(b[0], Small::new(7));
        assert!(b[1..].iter().all(|&x| x == Small::new(0)));

        let t = ntt_inverse(&[F::new(2)], 9).unwrap();
        assert_eq!(t, inverse(&[F::new(2)], 9).unwrap());
    }

    #[test]
    fn test_not_invertible() {
        let a = vec![F::new(0), F::new(1)];
        assert_eq!(inverse(&a, 4), Err(PolyError::NotInvertible));
        assert_eq!(ntt_inverse(&a, 4), Err(PolyError::NotInvertible));
        assert_eq!(inverse::<F>(&[], 4), Err(PolyError::NotInvertible));
        assert_eq!(inverse::<F>(&[], 0), Ok(Vec::new()));
    }
}
