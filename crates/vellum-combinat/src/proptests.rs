//! Property-based tests for permutation codes and factorial tables.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::factorial::Factorials;
    use crate::permutation::{factorial_u64, int_to_perm, perm_to_int, MAX_LEN};
    use vellum_integers::ModInt;

    type F = ModInt<998_244_353>;

    fn permutation() -> impl Strategy<Value = Vec<usize>> {
        (0..=MAX_LEN).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())
    }

    proptest! {
        #[test]
        fn code_roundtrip(perm in permutation()) {
            let code = perm_to_int(&perm).unwrap();
            prop_assert!(code < factorial_u64(perm.len()).unwrap());
            prop_assert_eq!(int_to_perm(code, perm.len()).unwrap(), perm);
        }

        #[test]
        fn decode_then_encode(n in 0..=MAX_LEN, seed in any::<u64>()) {
            let code = seed % factorial_u64(n).unwrap();
            let perm = int_to_perm(code, n).unwrap();
            prop_assert_eq!(perm_to_int(&perm).unwrap(), code);
        }

        #[test]
        fn pascal_rule(n in 1usize..200, k in 1usize..200) {
            let t = Factorials::<F>::new(200).unwrap();
            prop_assert_eq!(t.binomial(n, k), t.binomial(n - 1, k - 1) + t.binomial(n - 1, k));
        }
    }
}
