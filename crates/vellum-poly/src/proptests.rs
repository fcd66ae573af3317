//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::karatsuba::schoolbook_mul;
    use crate::algorithms::ntt::{convolve, FftPlan};
    use crate::dense::DensePoly;
    use crate::multipoint::{evaluate, interpolate};
    use vellum_integers::ModInt;
    use vellum_rings::Nimber;

    type F = ModInt<998_244_353>;

    fn coeff() -> impl Strategy<Value = F> {
        (0u64..998_244_353).prop_map(F::new)
    }

    fn small_poly() -> impl Strategy<Value = DensePoly<F>> {
        proptest::collection::vec(coeff(), 1..=8).prop_map(DensePoly::new)
    }

    // Long enough to go through the NTT and the series-inverse division.
    fn long_poly() -> impl Strategy<Value = DensePoly<F>> {
        proptest::collection::vec(coeff(), 33..=160).prop_map(DensePoly::new)
    }

    fn nonzero_poly() -> impl Strategy<Value = DensePoly<F>> {
        prop_oneof![small_poly(), long_poly()].prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    fn nimber_poly() -> impl Strategy<Value = DensePoly<Nimber>> {
        proptest::collection::vec(any::<u64>().prop_map(Nimber), 1..=40).prop_map(DensePoly::new)
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_mul_commutative(a in long_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in long_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn poly_distributive(a in long_poly(), b in long_poly(), c in small_poly()) {
            let left = &a * &(&b + &c);
            let right = &(&a * &b) + &(&a * &c);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!((&a + &(-&a)).is_zero());
        }

        #[test]
        fn poly_mul_identity(a in long_poly()) {
            prop_assert_eq!(&a * &DensePoly::one(), a);
        }

        // Kernels

        #[test]
        fn ntt_matches_schoolbook(
            a in proptest::collection::vec(coeff(), 1..200),
            b in proptest::collection::vec(coeff(), 1..200),
        ) {
            prop_assert_eq!(convolve(&a, &b), schoolbook_mul(&a, &b));
        }

        #[test]
        fn fft_roundtrip(a in proptest::collection::vec(coeff(), 64)) {
            let mut plan = FftPlan::new();
            let mut b = a.clone();
            plan.fft(&mut b);
            plan.ifft(&mut b);
            prop_assert_eq!(a, b);
        }

        // Division

        #[test]
        fn div_rem_identity(a in prop_oneof![small_poly(), long_poly()], d in nonzero_poly()) {
            let (q, r) = a.checked_div_rem(&d).unwrap();
            prop_assert!(r.is_zero() || r.degree() < d.degree());
            prop_assert_eq!(&(&q * &d) + &r, a);
        }

        #[test]
        fn mul_then_div_is_exact(a in long_poly(), d in nonzero_poly()) {
            let p = &a * &d;
            prop_assert_eq!(&p / &d, a);
            prop_assert!((&p % &d).is_zero());
        }

        #[test]
        fn nimber_div_rem_identity(a in nimber_poly(), d in nimber_poly()) {
            prop_assume!(!d.is_zero());
            let (q, r) = a.checked_div_rem(&d).unwrap();
            prop_assert!(r.is_zero() || r.degree() < d.degree());
            prop_assert_eq!(&(&q * &d) + &r, a);
        }

        // Multipoint

        #[test]
        fn evaluate_matches_horner(a in long_poly(), xs in proptest::collection::vec(coeff(), 0..64)) {
            let expected: Vec<F> = xs.iter().map(|x| a.eval(x)).collect();
            prop_assert_eq!(evaluate(&a, &xs), expected);
        }

        #[test]
        fn interpolate_inverts_evaluate(
            xs in proptest::collection::hash_set(0u64..1_000_000, 1..50),
            seed in small_poly(),
        ) {
            let xs: Vec<F> = xs.into_iter().map(F::new).collect();
            let p = seed.truncate(xs.len());
            let ys = evaluate(&p, &xs);
            prop_assert_eq!(interpolate(&xs, &ys).unwrap(), p);
        }
    }
}
