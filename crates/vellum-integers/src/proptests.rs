//! Property-based tests for prime-field arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::modular::{primes, ModInt};

    type F = ModInt<{ primes::P998244353 }>;
    type F7 = ModInt<7>;

    fn elem() -> impl Strategy<Value = F> {
        any::<u64>().prop_map(F::new)
    }

    fn nonzero_elem() -> impl Strategy<Value = F> {
        (1u64..primes::P998244353).prop_map(F::new)
    }

    proptest! {
        #[test]
        fn add_commutative(a in elem(), b in elem()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn mul_associative(a in elem(), b in elem(), c in elem()) {
            prop_assert_eq!((a * b) * c, a * (b * c));
        }

        #[test]
        fn distributive(a in elem(), b in elem(), c in elem()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn sub_is_add_neg(a in elem(), b in elem()) {
            prop_assert_eq!(a - b, a + (-b));
            prop_assert!((a - a).is_zero());
        }

        #[test]
        fn inverse_is_two_sided(a in nonzero_elem()) {
            let inv = a.inv().unwrap();
            prop_assert!((a * inv).is_one());
            prop_assert_eq!(inv, a.pow(primes::P998244353 - 2));
        }

        #[test]
        fn signed_matches_unsigned(v in -1_000_000i64..1_000_000i64) {
            let expected = if v >= 0 {
                F::new(v.unsigned_abs())
            } else {
                -F::new(v.unsigned_abs())
            };
            prop_assert_eq!(F::from_signed(v), expected);
        }

        #[test]
        fn fermat_small_prime(a in 1u64..7) {
            prop_assert!(F7::new(a).pow(6).is_one());
        }
    }
}
