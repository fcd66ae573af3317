//! Modular arithmetic.
//!
//! Residues modulo a compile-time prime. These are the scalars of the
//! number-theoretic transform, so the roots of unity the transform needs
//! are derived from the modulus at compile time.

use num_traits::{One, Zero};
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A residue modulo the prime `P`.
///
/// `P` must be an odd prime below `2^63`; the stored value is always in
/// `[0, P)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ModInt<const P: u64>(u64);

impl<const P: u64> ModInt<P> {
    /// Largest `k` such that `2^k` divides `P - 1`.
    ///
    /// Transforms over this field are limited to length `2^TWO_ADICITY`.
    pub const TWO_ADICITY: u32 = (P - 1).trailing_zeros();

    /// A primitive `2^TWO_ADICITY`-th root of unity.
    pub const ROOT_OF_UNITY: Self = Self(root_of_unity_2adic(P));

    /// Creates a new residue, reducing `value` modulo `P`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates a residue from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        let r = value.unsigned_abs() % P;
        if value < 0 && r != 0 {
            Self(P - r)
        } else {
            Self(r)
        }
    }

    /// Returns the canonical representative in `[0, P)`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus() -> u64 {
        P
    }

    /// Computes `self^exp` by binary exponentiation.
    #[must_use]
    pub const fn pow(self, exp: u64) -> Self {
        Self(pow_mod(self.0, exp, P))
    }

    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` for zero, or when the value shares a factor with the
    /// modulus.
    #[must_use]
    pub fn inv(self) -> Option<Self> {
        if self.0 == 0 {
            return None;
        }

        let mut t = 0i128;
        let mut new_t = 1i128;
        let mut r = i128::from(P);
        let mut new_r = i128::from(self.0);

        while new_r != 0 {
            let q = r / new_r;
            (t, new_t) = (new_t, t - q * new_t);
            (r, new_r) = (new_r, r - q * new_r);
        }

        if r != 1 {
            return None;
        }

        let t = t.rem_euclid(i128::from(P));
        // t < P < 2^63
        Some(Self(t as u64))
    }

    /// Returns a primitive `order`-th root of unity.
    ///
    /// `order` must be a power of two not exceeding `2^TWO_ADICITY`.
    #[must_use]
    pub fn root_of_unity(order: u64) -> Option<Self> {
        if !order.is_power_of_two() || order.trailing_zeros() > Self::TWO_ADICITY {
            return None;
        }
        let shift = Self::TWO_ADICITY - order.trailing_zeros();
        Some(Self::ROOT_OF_UNITY.pow(1u64 << shift))
    }

    /// Finds the smallest generator of the multiplicative group.
    ///
    /// Factors `P - 1` by trial division, so this is meant to be called once,
    /// not inside a hot loop.
    #[must_use]
    pub fn primitive_root() -> Self {
        if P == 2 {
            return Self(1);
        }

        let mut factors = Vec::new();
        let mut m = P - 1;
        let mut d = 2u64;
        while d * d <= m {
            if m % d == 0 {
                factors.push(d);
                while m % d == 0 {
                    m /= d;
                }
            }
            d += 1;
        }
        if m > 1 {
            factors.push(m);
        }

        (2..P)
            .map(Self)
            .find(|g| factors.iter().all(|&f| g.pow((P - 1) / f).0 != 1))
            .unwrap_or(Self(1))
    }
}

/// Binary exponentiation modulo `p` with 128-bit intermediates.
const fn pow_mod(mut base: u64, mut exp: u64, p: u64) -> u64 {
    let mut result = 1 % p;
    base %= p;
    while exp > 0 {
        if exp & 1 == 1 {
            result = ((result as u128 * base as u128) % p as u128) as u64;
        }
        base = ((base as u128 * base as u128) % p as u128) as u64;
        exp >>= 1;
    }
    result
}

/// `q^((p-1)/2^s)` for the smallest quadratic non-residue `q`, where
/// `2^s` is the largest power of two dividing `p - 1`.
///
/// A non-residue has a 2-part of order exactly `2^s`, so the result is a
/// primitive `2^s`-th root of unity.
const fn root_of_unity_2adic(p: u64) -> u64 {
    if p <= 2 {
        return 1 % p;
    }
    let s = (p - 1).trailing_zeros();
    let odd = (p - 1) >> s;
    let mut q = 2;
    while q < p {
        if pow_mod(q, (p - 1) / 2, p) == p - 1 {
            return pow_mod(q, odd, p);
        }
        q += 1;
    }
    1
}

/// Returns `[0, 1/1, 1/2, ..., 1/n]` modulo `P` in linear time.
///
/// Uses `1/i = -(P / i) * 1/(P mod i)`. Requires `n < P`.
#[must_use]
pub fn inverses_upto<const P: u64>(n: usize) -> Vec<ModInt<P>> {
    let mut inv = vec![ModInt::<P>::zero(); n + 1];
    if n >= 1 {
        inv[1] = ModInt::one();
    }
    for i in 2..=n {
        let iu = i as u64;
        inv[i] = -(ModInt::<P>::new(P / iu) * inv[(P % iu) as usize]);
    }
    inv
}

impl<const P: u64> Zero for ModInt<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const P: u64> One for ModInt<P> {
    fn one() -> Self {
        Self(1 % P)
    }

    fn is_one(&self) -> bool {
        self.0 == 1
    }
}

impl<const P: u64> fmt::Debug for ModInt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, P)
    }
}

impl<const P: u64> fmt::Display for ModInt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const P: u64> Add for ModInt<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let s = self.0 + rhs.0;
        Self(if s >= P { s - P } else { s })
    }
}

impl<const P: u64> Sub for ModInt<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.0 >= rhs.0 {
            Self(self.0 - rhs.0)
        } else {
            Self(self.0 + P - rhs.0)
        }
    }
}

impl<const P: u64> Mul for ModInt<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(((u128::from(self.0) * u128::from(rhs.0)) % u128::from(P)) as u64)
    }
}

impl<const P: u64> Div for ModInt<P> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is not invertible.
    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.inv().expect("division by non-invertible element")
    }
}

impl<const P: u64> Neg for ModInt<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            self
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> AddAssign for ModInt<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const P: u64> SubAssign for ModInt<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const P: u64> MulAssign for ModInt<P> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const P: u64> Sum for ModInt<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<const P: u64> Product for ModInt<P> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}

impl<const P: u64> From<u64> for ModInt<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for ModInt<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

impl<const P: u64> From<u32> for ModInt<P> {
    fn from(value: u32) -> Self {
        Self::new(u64::from(value))
    }
}

/// NTT-friendly primes `c * 2^k + 1`.
///
/// Each is paired with the two-adicity `k`; the largest transform length is
/// `2^k`.
pub mod primes {
    /// `119 * 2^23 + 1`, primitive root 3.
    pub const P998244353: u64 = 998_244_353;

    /// `5 * 2^25 + 1`, primitive root 3.
    pub const P167772161: u64 = 167_772_161;

    /// `7 * 2^26 + 1`, primitive root 3.
    pub const P469762049: u64 = 469_762_049;

    /// `479 * 2^21 + 1`, primitive root 3. Larger than `10^9`.
    pub const P1004535809: u64 = 1_004_535_809;

    /// `483 * 2^21 + 1`, primitive root 5. Larger than `10^9`.
    pub const P1012924417: u64 = 1_012_924_417;

    /// `73 * 2^24 + 1`, primitive root 3.
    pub const P1224736769: u64 = 1_224_736_769;
}

/// The usual transform field, `Z / 998244353`.
pub type Mod998244353 = ModInt<{ primes::P998244353 }>;
