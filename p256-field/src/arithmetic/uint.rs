//! Raw 256-bit integer arithmetic on little-endian `u64` limbs.
//!
//! Nothing in here knows about the field modulus: these are plain
//! fixed-width operations which report overflow instead of correcting it.

use super::util::{adc, sbb};

/// Number of 64-bit limbs in a 256-bit integer.
pub const LIMBS: usize = 4;

/// 256-bit unsigned integer as little-endian `u64` limbs.
pub type Limbs = [u64; LIMBS];

/// Computes `a + b`, returning the low 256 bits and the carry (`0` or `1`).
#[inline]
pub const fn add_raw(a: &Limbs, b: &Limbs) -> (Limbs, u64) {
    let (w0, carry) = adc(a[0], b[0], 0);
    let (w1, carry) = adc(a[1], b[1], carry);
    let (w2, carry) = adc(a[2], b[2], carry);
    let (w3, carry) = adc(a[3], b[3], carry);
    ([w0, w1, w2, w3], carry)
}

/// Computes `a - b`, returning the result modulo 2^256 and the borrow
/// (`0` or `1`).
#[inline]
pub const fn sub_raw(a: &Limbs, b: &Limbs) -> (Limbs, u64) {
    let (w0, borrow) = sbb(a[0], b[0], 0);
    let (w1, borrow) = sbb(a[1], b[1], borrow);
    let (w2, borrow) = sbb(a[2], b[2], borrow);
    let (w3, borrow) = sbb(a[3], b[3], borrow);
    ([w0, w1, w2, w3], borrow & 1)
}

/// Shifts the 257-bit value `top:a` right by one bit.
///
/// `top` is the bit shifted into position 255; pass `0` for a plain halving
/// or the carry of a preceding [`add_raw`] to halve a 257-bit sum.
#[inline]
pub const fn shr1(a: &Limbs, top: u64) -> Limbs {
    [
        (a[0] >> 1) | (a[1] << 63),
        (a[1] >> 1) | (a[2] << 63),
        (a[2] >> 1) | (a[3] << 63),
        (a[3] >> 1) | (top << 63),
    ]
}

/// Returns `a` if `mask == u64::MAX` and zero if `mask == 0`.
#[inline]
pub(crate) const fn and_mask(a: &Limbs, mask: u64) -> Limbs {
    [a[0] & mask, a[1] & mask, a[2] & mask, a[3] & mask]
}

/// Is `a` zero?
#[inline]
pub const fn is_zero(a: &Limbs) -> bool {
    (a[0] | a[1] | a[2] | a[3]) == 0
}

/// Is `a` one?
#[inline]
pub const fn is_one(a: &Limbs) -> bool {
    ((a[0] ^ 1) | a[1] | a[2] | a[3]) == 0
}

/// Is the low bit of `a` set?
#[inline]
pub const fn is_odd(a: &Limbs) -> bool {
    (a[0] & 1) == 1
}

/// Is `a >= b`?
#[inline]
pub const fn ge(a: &Limbs, b: &Limbs) -> bool {
    sub_raw(a, b).1 == 0
}

/// Decodes little-endian bytes into limbs.
pub(crate) const fn from_le_bytes(bytes: &[u8; 32]) -> Limbs {
    let mut limbs = [0u64; LIMBS];
    let mut i = 0;
    while i < LIMBS {
        let mut j = 8;
        while j > 0 {
            j -= 1;
            limbs[i] = (limbs[i] << 8) | bytes[i * 8 + j] as u64;
        }
        i += 1;
    }
    limbs
}

/// Encodes limbs as little-endian bytes.
pub(crate) const fn to_le_bytes(limbs: &Limbs) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    let mut i = 0;
    while i < 32 {
        bytes[i] = (limbs[i / 8] >> ((i % 8) * 8)) as u8;
        i += 1;
    }
    bytes
}
