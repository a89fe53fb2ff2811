//! Double-width (512-bit) values: schoolbook multiplication and fast
//! reduction modulo p.
//!
//! The reduction uses the special form of p. Splitting a 512-bit value `T`
//! into 32-bit words `c0..c15` (`c0` least significant), FIPS 186 (D.2.3)
//! gives
//!
//! ```text
//! T ≡ T_lo + 2 S1 + 2 S2 + S3 + S4 - D1 - D2 - D3 - D4 (mod p)
//!
//! T_lo = (c7,  c6,  c5,  c4,  c3,  c2,  c1,  c0 )
//! S1   = (c15, c14, c13, c12, c11, 0,   0,   0  )
//! S2   = (0,   c15, c14, c13, c12, 0,   0,   0  )
//! S3   = (c15, c14, 0,   0,   0,   c10, c9,  c8 )
//! S4   = (c8,  c13, c15, c14, c13, c11, c10, c9 )
//! D1   = (c10, c8,  0,   0,   0,   c13, c12, c11)
//! D2   = (c11, c9,  0,   0,   c15, c14, c13, c12)
//! D3   = (c12, 0,   c10, c9,  c8,  c15, c14, c13)
//! D4   = (c13, 0,   c11, c10, c9,  0,   c15, c14)
//! ```
//!
//! where each term is written most significant word first. The slice
//! tables below list the same terms least significant word first.

use super::{
    field::{FieldElement, fe_add, fe_sub, normalize},
    uint::{LIMBS, Limbs, from_le_bytes, to_le_bytes},
    util::mac,
};
use crate::{FieldBytes, WideBytes};
use core::fmt;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::DefaultIsZeroes;

/// Number of 64-bit limbs in a 512-bit integer.
const WIDE_LIMBS: usize = 2 * LIMBS;

/// 512-bit unsigned integer as little-endian `u64` limbs.
pub(crate) type WideLimbs = [u64; WIDE_LIMBS];

/// Index of the always-zero word appended after `c15`.
const NIL: u8 = 16;

/// Source word index for each 32-bit word of a reduction term,
/// least significant word first.
type Slices = [u8; 8];

const T_LO: Slices = [0, 1, 2, 3, 4, 5, 6, 7];
const S1: Slices = [NIL, NIL, NIL, 11, 12, 13, 14, 15];
const S2: Slices = [NIL, NIL, NIL, 12, 13, 14, 15, NIL];
const S3: Slices = [8, 9, 10, NIL, NIL, NIL, 14, 15];
const S4: Slices = [9, 10, 11, 13, 14, 15, 13, 8];
const D1: Slices = [11, 12, 13, NIL, NIL, NIL, 8, 10];
const D2: Slices = [12, 13, 14, 15, NIL, NIL, 9, 11];
const D3: Slices = [13, 14, 15, 8, 9, 10, NIL, 12];
const D4: Slices = [14, 15, NIL, 9, 10, 11, NIL, 13];

/// Terms added to the accumulator, in order.
const ADDENDS: [Slices; 6] = [S1, S1, S2, S2, S3, S4];

/// Terms subtracted from the accumulator, in order.
const SUBTRAHENDS: [Slices; 4] = [D1, D2, D3, D4];

/// Computes the full 512-bit product `a * b` (schoolbook).
pub(crate) const fn mul_wide(a: &Limbs, b: &Limbs) -> WideLimbs {
    let mut w = [0u64; WIDE_LIMBS];
    let mut i = 0;

    while i < LIMBS {
        let mut carry = 0;
        let mut j = 0;

        while j < LIMBS {
            let (lo, hi) = mac(w[i + j], a[i], b[j], carry);
            w[i + j] = lo;
            carry = hi;
            j += 1;
        }

        // Rows before `i` only reach `w[i + LIMBS - 1]`.
        w[i + LIMBS] = carry;
        i += 1;
    }

    w
}

/// Reduces any 512-bit value to its canonical representative modulo p.
///
/// Performs the same sequence of 256-bit operations for every input.
pub(crate) const fn reduce(t: &WideLimbs) -> Limbs {
    let c = split_words(t);

    let mut acc = normalize(&gather(&c, &T_LO));

    let mut i = 0;
    while i < ADDENDS.len() {
        acc = fe_add(&acc, &normalize(&gather(&c, &ADDENDS[i])));
        i += 1;
    }

    let mut i = 0;
    while i < SUBTRAHENDS.len() {
        acc = fe_sub(&acc, &normalize(&gather(&c, &SUBTRAHENDS[i])));
        i += 1;
    }

    acc
}

/// Splits `t` into its sixteen 32-bit words followed by a zero word.
const fn split_words(t: &WideLimbs) -> [u32; 17] {
    let mut c = [0u32; 17];
    let mut i = 0;
    while i < WIDE_LIMBS {
        c[2 * i] = t[i] as u32;
        c[2 * i + 1] = (t[i] >> 32) as u32;
        i += 1;
    }
    c
}

/// Assembles a 256-bit term from the words selected by `slices`.
const fn gather(c: &[u32; 17], slices: &Slices) -> Limbs {
    let mut limbs = [0u64; LIMBS];
    let mut i = 0;
    while i < LIMBS {
        let lo = c[slices[2 * i] as usize] as u64;
        let hi = c[slices[2 * i + 1] as usize] as u64;
        limbs[i] = lo | (hi << 32);
        i += 1;
    }
    limbs
}

/// An unreduced 512-bit integer, typically the product of two field elements.
///
/// The byte encoding is 64 bytes, least significant byte first.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct WideElement(pub(crate) WideLimbs);

impl WideElement {
    /// Zero.
    pub const ZERO: Self = Self([0; WIDE_LIMBS]);

    /// Decodes a 512-bit integer from little-endian bytes.
    ///
    /// Every byte string is a valid wide element.
    pub const fn from_bytes(bytes: &WideBytes) -> Self {
        let mut lo = [0u8; 32];
        let mut hi = [0u8; 32];
        let mut i = 0;
        while i < 32 {
            lo[i] = bytes[i];
            hi[i] = bytes[i + 32];
            i += 1;
        }
        Self::from_halves(&lo, &hi)
    }

    /// Builds `hi * 2^256 + lo` from two little-endian 256-bit halves.
    pub const fn from_halves(lo: &FieldBytes, hi: &FieldBytes) -> Self {
        let lo = from_le_bytes(lo);
        let hi = from_le_bytes(hi);
        Self([lo[0], lo[1], lo[2], lo[3], hi[0], hi[1], hi[2], hi[3]])
    }

    /// Encodes as 64 little-endian bytes.
    pub const fn to_bytes(&self) -> WideBytes {
        let lo = to_le_bytes(&[self.0[0], self.0[1], self.0[2], self.0[3]]);
        let hi = to_le_bytes(&[self.0[4], self.0[5], self.0[6], self.0[7]]);
        let mut bytes = [0u8; 64];
        let mut i = 0;
        while i < 32 {
            bytes[i] = lo[i];
            bytes[i + 32] = hi[i];
            i += 1;
        }
        bytes
    }

    /// Returns the field element congruent to `self` modulo p.
    pub const fn reduce(&self) -> FieldElement {
        FieldElement(reduce(&self.0))
    }
}

impl ConditionallySelectable for WideElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut ret = Self::ZERO;
        for i in 0..WIDE_LIMBS {
            ret.0[i] = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        ret
    }
}

impl ConstantTimeEq for WideElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl DefaultIsZeroes for WideElement {}

impl From<WideElement> for FieldElement {
    fn from(wide: WideElement) -> FieldElement {
        wide.reduce()
    }
}

impl fmt::Debug for WideElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WideElement(0x{self:X})")
    }
}

impl fmt::LowerHex for WideElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.0.iter().rev() {
            write!(f, "{limb:016x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for WideElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.0.iter().rev() {
            write!(f, "{limb:016X}")?;
        }
        Ok(())
    }
}
