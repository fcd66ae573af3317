//! Property-based tests for power series.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::power_series::PowerSeries;
    use vellum_integers::ModInt;

    type F = ModInt<998_244_353>;

    fn coeff() -> impl Strategy<Value = F> {
        (0u64..998_244_353).prop_map(F::new)
    }

    fn unit_series() -> impl Strategy<Value = PowerSeries<F>> {
        (1u64..998_244_353, proptest::collection::vec(coeff(), 0..80)).prop_map(|(c0, rest)| {
            let mut coeffs = vec![F::new(c0)];
            coeffs.extend(rest);
            PowerSeries::from_coeffs(coeffs)
        })
    }

    fn series_with_constant(c0: u64) -> impl Strategy<Value = PowerSeries<F>> {
        proptest::collection::vec(coeff(), 0..80).prop_map(move |rest| {
            let mut coeffs = vec![F::new(c0)];
            coeffs.extend(rest);
            PowerSeries::from_coeffs(coeffs)
        })
    }

    proptest! {
        #[test]
        fn inverse_times_self_is_one(a in unit_series()) {
            let inv = a.inverse().unwrap();
            prop_assert_eq!(&a * &inv, PowerSeries::one(a.precision()));
        }

        #[test]
        fn exp_inverts_log(a in series_with_constant(1)) {
            prop_assert_eq!(a.log().unwrap().exp().unwrap(), a);
        }

        #[test]
        fn log_inverts_exp(a in series_with_constant(0)) {
            prop_assert_eq!(a.exp().unwrap().log().unwrap(), a);
        }

        #[test]
        fn log_of_product_is_sum(a in series_with_constant(1), b in series_with_constant(1)) {
            let lhs = (&a * &b).log().unwrap();
            let rhs = &a.log().unwrap() + &b.log().unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn pow_is_repeated_product(a in unit_series(), k in 0u64..6) {
            let mut expected = PowerSeries::one(a.precision());
            for _ in 0..k {
                expected = &expected * &a;
            }
            prop_assert_eq!(a.pow(k).unwrap(), expected);
        }

        #[test]
        fn pow_adds_exponents(a in unit_series(), j in 0u64..1000, k in 0u64..1000) {
            let lhs = a.pow(j + k).unwrap();
            let rhs = &a.pow(j).unwrap() * &a.pow(k).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn derivative_undoes_integral(a in proptest::collection::vec(coeff(), 0..80)) {
            let a = PowerSeries::from_coeffs(a);
            prop_assert_eq!(a.integral().unwrap().derivative(), a);
        }
    }
}
