//! Nimbers: the field of order `2^64` from combinatorial game theory.
//!
//! Addition is XOR (nim-sum) and multiplication is the nim-product. The
//! nim-product distributes over XOR, so a product of two words is the XOR of
//! the products of their set bits, `2^i ⊗ 2^j`. Those 4096 values are
//! computed once and shared.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::sync::OnceLock;

use crate::traits::{Field, Ring};

type Pow2Table = [[u64; 64]; 64];

static POW2_PRODUCTS: OnceLock<Box<Pow2Table>> = OnceLock::new();

/// Returns the table of `2^i ⊗ 2^j`, building it on first use.
fn pow2_products() -> &'static Pow2Table {
    POW2_PRODUCTS.get_or_init(|| {
        let mut builder = TableBuilder {
            memo: Box::new([[None; 64]; 64]),
        };
        let mut table = Box::new([[0u64; 64]; 64]);
        for i in 0..64 {
            for j in 0..64 {
                table[i][j] = builder.pow2_product(i as u32, j as u32);
            }
        }
        table
    })
}

/// Memoised recursion for `2^i ⊗ 2^j`.
///
/// Write `2^i` as the ordinary (equivalently, nim-) product of the Fermat
/// 2-powers `F_k = 2^(2^k)` for the set bits `k` of `i`. A Fermat 2-power
/// appearing in only one factor multiplies in as a plain shift; one
/// appearing in both contributes `F_k ⊗ F_k = 3/2 * F_k`.
struct TableBuilder {
    memo: Box<[[Option<u64>; 64]; 64]>,
}

impl TableBuilder {
    fn pow2_product(&mut self, i: u32, j: u32) -> u64 {
        if i == 0 || j == 0 {
            return 1u64 << (i + j);
        }
        if let Some(v) = self.memo[i as usize][j as usize] {
            return v;
        }

        let mut squares = 1u64;
        let mut shift = 0u32;
        let mut k = 0;
        while (i >> k) != 0 || (j >> k) != 0 {
            let bit = 1u32 << k;
            if (i ^ j) & bit != 0 {
                shift += bit;
            } else if i & bit != 0 {
                // 3/2 * 2^(2^k)
                squares = self.mul(squares, 3u64 << (bit - 1));
            }
            k += 1;
        }

        let v = self.mul(squares, 1u64 << shift);
        self.memo[i as usize][j as usize] = Some(v);
        v
    }

    fn mul(&mut self, x: u64, y: u64) -> u64 {
        let mut result = 0;
        for i in BitIter(x) {
            for j in BitIter(y) {
                result ^= self.pow2_product(i, j);
            }
        }
        result
    }
}

/// Iterates over the indices of the set bits of a word, lowest first.
struct BitIter(u64);

impl Iterator for BitIter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.0 == 0 {
            return None;
        }
        let i = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Some(i)
    }
}

/// Computes the nim-product `x ⊗ y`.
#[must_use]
pub fn nim_mul(x: u64, y: u64) -> u64 {
    let table = pow2_products();
    let mut result = 0;
    for i in BitIter(x) {
        let row = &table[i as usize];
        for j in BitIter(y) {
            result ^= row[j as usize];
        }
    }
    result
}

/// Computes `x ⊗ x`.
#[must_use]
pub fn nim_square(x: u64) -> u64 {
    // Squaring is additive in characteristic 2.
    let table = pow2_products();
    BitIter(x).fold(0, |acc, i| acc ^ table[i as usize][i as usize])
}

/// Computes the nim-power `x^e` by square-and-multiply.
#[must_use]
pub fn nim_pow(x: u64, e: u64) -> u64 {
    let mut result = 1;
    let mut base = x;
    let mut e = e;
    while e > 0 {
        if e & 1 == 1 {
            result = nim_mul(result, base);
        }
        base = nim_square(base);
        e >>= 1;
    }
    result
}

/// An element of the nimber field of order `2^64`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Nimber(pub u64);

impl Nimber {
    /// Creates a nimber.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying word.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Nim-square.
    #[must_use]
    pub fn square(self) -> Self {
        Self(nim_square(self.0))
    }
}

impl fmt::Debug for Nimber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*{}", self.0)
    }
}

impl fmt::Display for Nimber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*{}", self.0)
    }
}

impl Add for Nimber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Sub for Nimber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Mul for Nimber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(nim_mul(self.0, rhs.0))
    }
}

impl Neg for Nimber {
    type Output = Self;

    fn neg(self) -> Self {
        self
    }
}

impl AddAssign for Nimber {
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl SubAssign for Nimber {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl MulAssign for Nimber {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl From<u64> for Nimber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Ring for Nimber {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self(1)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1
    }

    /// Characteristic 2: only the parity of `n` survives.
    fn from_u64(n: u64) -> Self {
        Self(n & 1)
    }

    fn pow(&self, n: u64) -> Self {
        Self(nim_pow(self.0, n))
    }
}

impl Field for Nimber {
    /// The multiplicative group has order `2^64 - 1`, so `x^-1 = x^(2^64 - 2)`.
    fn inv(&self) -> Option<Self> {
        if self.0 == 0 {
            None
        } else {
            Some(Self(nim_pow(self.0, u64::MAX - 1)))
        }
    }
}
