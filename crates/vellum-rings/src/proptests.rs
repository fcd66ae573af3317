//! Property-based tests for the field axioms.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::nimber::{nim_mul, Nimber};
    use crate::traits::{Field, Ring};

    fn nimber() -> impl Strategy<Value = Nimber> {
        any::<u64>().prop_map(Nimber)
    }

    fn small_nimber() -> impl Strategy<Value = Nimber> {
        (0u64..1 << 16).prop_map(Nimber)
    }

    proptest! {
        #[test]
        fn nim_mul_commutative(a in nimber(), b in nimber()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn nim_mul_associative(a in nimber(), b in nimber(), c in nimber()) {
            prop_assert_eq!((a * b) * c, a * (b * c));
        }

        #[test]
        fn nim_distributive(a in nimber(), b in nimber(), c in nimber()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn nim_inverse(a in nimber()) {
            prop_assume!(!a.is_zero());
            let inv = a.inv().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn nim_subfield_closed(a in small_nimber(), b in small_nimber()) {
            // The nimbers below 2^16 form the subfield GF(2^16).
            prop_assert!(nim_mul(a.0, b.0) < 1 << 16);
        }

        #[test]
        fn nim_pow_adds_exponents(a in nimber(), e in 0u64..1000, f in 0u64..1000) {
            prop_assert_eq!(a.pow(e) * a.pow(f), a.pow(e + f));
        }
    }
}
