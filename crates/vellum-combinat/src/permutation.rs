//! Permutation <-> integer codes.
//!
//! The code of `perm` is the mixed-radix number whose `i`-th digit (radix
//! `i`, 1-based) counts the earlier entries greater than `perm[i - 1]`.
//! Encoding is `O(n)` with a bitmask of seen values; it is a bijection
//! onto `0..n!` but does not preserve lexicographic order.

use crate::error::CombinatError;

/// Longest permutation whose code fits in a `u64` (`20! < 2^64 < 21!`).
pub const MAX_LEN: usize = 20;

/// Encodes a permutation of `0..perm.len()` as an integer below `len!`.
///
/// # Errors
///
/// - [`CombinatError::TooLong`] if `perm.len() > MAX_LEN`
/// - [`CombinatError::OutOfRange`] if an entry is not below `perm.len()`
/// - [`CombinatError::Repeated`] if an entry occurs twice
///
/// # Example
///
/// ```
/// use vellum_combinat::{int_to_perm, perm_to_int};
///
/// let code = perm_to_int(&[2, 0, 1]).unwrap();
/// assert_eq!(int_to_perm(code, 3).unwrap(), vec![2, 0, 1]);
/// ```
pub fn perm_to_int(perm: &[usize]) -> Result<u64, CombinatError> {
    let len = perm.len();
    if len > MAX_LEN {
        return Err(CombinatError::TooLong { len });
    }

    let mut used = 0u64;
    let mut code = 0u64;
    for (i, &x) in perm.iter().enumerate() {
        if x >= len {
            return Err(CombinatError::OutOfRange { value: x, len });
        }
        let bit = 1u64 << x;
        if used & bit != 0 {
            return Err(CombinatError::Repeated { value: x });
        }
        // Set bits at or above x; x itself is not set yet.
        let greater = (used & bit.wrapping_neg()).count_ones();
        code = code * (i as u64 + 1) + u64::from(greater);
        used |= bit;
    }
    Ok(code)
}

/// Decodes [`perm_to_int`].
///
/// # Errors
///
/// - [`CombinatError::TooLong`] if `len > MAX_LEN`
/// - [`CombinatError::CodeOutOfRange`] if `code >= len!`
pub fn int_to_perm(code: u64, len: usize) -> Result<Vec<usize>, CombinatError> {
    if len > MAX_LEN {
        return Err(CombinatError::TooLong { len });
    }

    // Peel off the digits, last position first.
    let mut digits = vec![0usize; len];
    let mut rest = code;
    for i in (1..=len).rev() {
        let radix = i as u64;
        digits[i - 1] = (rest % radix) as usize;
        rest /= radix;
    }
    if rest != 0 {
        return Err(CombinatError::CodeOutOfRange { code, len });
    }

    // The entry at position i is the (digit + 1)-th largest value not yet
    // placed at a later position.
    let mut remaining = (1u64 << len) - 1;
    let mut perm = vec![0usize; len];
    for i in (0..len).rev() {
        let mut m = remaining;
        for _ in 0..digits[i] {
            m &= !(1u64 << (63 - m.leading_zeros()));
        }
        let x = 63 - m.leading_zeros() as usize;
        perm[i] = x;
        remaining &= !(1u64 << x);
    }
    Ok(perm)
}

/// Returns `n!` for `n <= MAX_LEN`.
#[must_use]
pub fn factorial_u64(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, u64::checked_mul)
}
