//! Field arithmetic modulo p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1

#![allow(clippy::op_ref)]

use super::{
    uint::{
        Limbs, add_raw, and_mask, from_le_bytes, ge, is_odd, is_zero, shr1, sub_raw, to_le_bytes,
    },
    wide::{WideElement, mul_wide, reduce},
};
use crate::{Error, FieldBytes, Result};
use core::{
    fmt::{self, Debug},
    iter::{Product, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Serialize, de, ser};

/// Field modulus serialized as hex.
/// p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1
pub const MODULUS_HEX: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

/// Field modulus p as little-endian limbs.
pub const MODULUS: Limbs = [
    0xffff_ffff_ffff_ffff,
    0x0000_0000_ffff_ffff,
    0x0000_0000_0000_0000,
    0xffff_ffff_0000_0001,
];

/// 2^256 mod p = 2^{224} − 2^{192} − 2^{96} + 1, as little-endian limbs.
///
/// Adding it back after an addition carries out of bit 255 replaces the
/// dropped 2^256 with a congruent value.
pub const REDUCER: Limbs = [
    0x0000_0000_0000_0001,
    0xffff_ffff_0000_0000,
    0xffff_ffff_ffff_ffff,
    0x0000_0000_ffff_fffe,
];

/// Is `a` in `[0, p)`?
const fn is_canonical(a: &Limbs) -> bool {
    !ge(a, &MODULUS)
}

/// Maps any 256-bit value to `[0, p)` by subtracting p at most once.
///
/// Sound because 2^256 < 2p.
pub(crate) const fn normalize(a: &Limbs) -> Limbs {
    let (diff, borrow) = sub_raw(a, &MODULUS);
    add_raw(&diff, &and_mask(&MODULUS, borrow.wrapping_neg())).0
}

/// Computes `a + b mod p` for `a, b` in `[0, p)`.
pub(crate) const fn fe_add(a: &Limbs, b: &Limbs) -> Limbs {
    debug_assert!(is_canonical(a) && is_canonical(b));

    let (sum, carry) = add_raw(a, b);

    // a + b < 2p, so after a carry sum + REDUCER = a + b - p < p and the
    // addition below cannot carry again.
    let (sum, _) = add_raw(&sum, &and_mask(&REDUCER, carry.wrapping_neg()));

    // Without a carry the sum may still lie in [p, 2^256).
    normalize(&sum)
}

/// Computes `a - b mod p` for `a, b` in `[0, p)`.
pub(crate) const fn fe_sub(a: &Limbs, b: &Limbs) -> Limbs {
    debug_assert!(is_canonical(a) && is_canonical(b));

    let (diff, borrow) = sub_raw(a, b);

    // a - b > -p, so adding p once is enough; its carry out is discarded.
    add_raw(&diff, &and_mask(&MODULUS, borrow.wrapping_neg())).0
}

/// Computes `a / 2 mod p` for `a` in `[0, p)`.
const fn fe_half(a: &Limbs) -> Limbs {
    // p is odd, so a + p is even whenever a is odd. The sum needs 257 bits.
    let odd = (a[0] & 1).wrapping_neg();
    let (sum, carry) = add_raw(a, &and_mask(&MODULUS, odd));
    shr1(&sum, carry)
}

/// An element in the finite field modulo p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1.
///
/// The internal representation is four little-endian `u64` limbs holding the
/// canonical value in `[0, p)`; every constructor enforces that range.
#[derive(Clone, Copy)]
pub struct FieldElement(pub(crate) Limbs);

impl FieldElement {
    /// Zero element.
    pub const ZERO: Self = Self([0, 0, 0, 0]);

    /// Multiplicative identity.
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// Attempts to parse the given byte array as a little-endian field element.
    ///
    /// Returns `None` if the byte array does not contain an integer in `[0, p)`.
    pub fn from_bytes(bytes: &FieldBytes) -> CtOption<Self> {
        let limbs = from_le_bytes(bytes);
        let (_, borrow) = sub_raw(&limbs, &MODULUS);
        CtOption::new(Self(limbs), Choice::from(borrow as u8))
    }

    /// Attempts to parse the given byte array as a big-endian (SEC1) field
    /// element.
    pub fn from_be_bytes(bytes: &FieldBytes) -> CtOption<Self> {
        let mut le = *bytes;
        le.reverse();
        Self::from_bytes(&le)
    }

    /// Decodes a little-endian field element from a byte slice.
    ///
    /// Fails if the slice is not 32 bytes long or the value is not in `[0, p)`.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes = FieldBytes::try_from(slice).map_err(|_| Error)?;
        Option::from(Self::from_bytes(&bytes)).ok_or(Error)
    }

    /// Converts a `u64` into a field element.
    pub const fn from_u64(w: u64) -> Self {
        Self([w, 0, 0, 0])
    }

    /// Returns the little-endian encoding of this field element.
    pub const fn to_bytes(self) -> FieldBytes {
        to_le_bytes(&self.0)
    }

    /// Returns the big-endian (SEC1) encoding of this field element.
    pub fn to_be_bytes(self) -> FieldBytes {
        let mut bytes = self.to_bytes();
        bytes.reverse();
        bytes
    }

    /// Determine if this `FieldElement` is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Determine if this `FieldElement` is odd in the SEC1 sense: `self mod 2 == 1`.
    pub fn is_odd(&self) -> Choice {
        Choice::from(is_odd(&self.0) as u8)
    }

    /// Returns `self + rhs mod p`.
    #[inline]
    pub const fn add(&self, rhs: &Self) -> Self {
        Self(fe_add(&self.0, &rhs.0))
    }

    /// Returns `self - rhs mod p`.
    #[inline]
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self(fe_sub(&self.0, &rhs.0))
    }

    /// Returns `-self mod p`.
    #[inline]
    pub const fn neg(&self) -> Self {
        Self::sub(&Self::ZERO, self)
    }

    /// Returns `2 * self mod p`.
    #[must_use]
    pub const fn double(&self) -> Self {
        self.add(self)
    }

    /// Returns `self / 2 mod p`.
    #[must_use]
    pub const fn half(&self) -> Self {
        Self(fe_half(&self.0))
    }

    /// Returns the full 512-bit product `self * rhs`, without reduction.
    #[inline]
    pub const fn mul_wide(&self, rhs: &Self) -> WideElement {
        WideElement(mul_wide(&self.0, &rhs.0))
    }

    /// Returns `self * rhs mod p`.
    pub const fn multiply(&self, rhs: &Self) -> Self {
        Self(reduce(&mul_wide(&self.0, &rhs.0)))
    }

    /// Returns `self * self mod p`.
    #[must_use]
    pub const fn square(&self) -> Self {
        self.multiply(self)
    }

    /// Returns `self^exp`, where `exp` is a little-endian integer exponent.
    ///
    /// **This operation is variable time with respect to the exponent.**
    pub fn pow_vartime(&self, exp: &[u64]) -> Self {
        let mut res = Self::ONE;
        for e in exp.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res = res.multiply(self);
                }
            }
        }
        res
    }

    /// Returns the multiplicative inverse of self, if self is non-zero.
    ///
    /// **This operation is variable time.**
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.invert_unchecked(), !self.is_zero())
    }

    /// Returns the multiplicative inverse of self, computed with the binary
    /// extended Euclidean algorithm.
    ///
    /// Does not check that self is non-zero: zero has no inverse and maps to
    /// zero.
    ///
    /// **This operation is variable time.**
    pub const fn invert_unchecked(&self) -> Self {
        // Invariants: x1 * self ≡ u and x2 * self ≡ v (mod p).
        let mut u = self.0;
        let mut v = MODULUS;
        let mut x1 = Self::ONE.0;
        let mut x2 = Self::ZERO.0;

        // Each round removes at least one bit from u or v, so this runs at
        // most 2 * 256 times.
        while !is_zero(&u) {
            while !is_odd(&u) {
                u = shr1(&u, 0);
                x1 = fe_half(&x1);
            }

            // v starts at p and only shrinks to odd values, but never to zero.
            while !is_odd(&v) {
                v = shr1(&v, 0);
                x2 = fe_half(&x2);
            }

            if ge(&u, &v) {
                u = sub_raw(&u, &v).0;
                x1 = fe_sub(&x1, &x2);
            } else {
                v = sub_raw(&v, &u).0;
                x2 = fe_sub(&x2, &x1);
            }
        }

        // u only reaches zero from u = v = gcd(self, p) = 1, leaving v = 1.
        Self(x2)
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl Default for FieldElement {
    fn default() -> Self {
        Self::ZERO
    }
}

impl DefaultIsZeroes for FieldElement {}

impl From<u64> for FieldElement {
    fn from(n: u64) -> FieldElement {
        Self::from_u64(n)
    }
}

impl From<FieldElement> for FieldBytes {
    fn from(fe: FieldElement) -> FieldBytes {
        fe.to_bytes()
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{self:X})")
    }
}

impl fmt::LowerHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.0.iter().rev() {
            write!(f, "{limb:016x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.0.iter().rev() {
            write!(f, "{limb:016X}")?;
        }
        Ok(())
    }
}

macro_rules! field_op {
    ($op:ident, $func:ident, $inner_func:ident, $op_assign:ident, $func_assign:ident) => {
        impl $op for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $func(self, rhs: FieldElement) -> FieldElement {
                FieldElement::$inner_func(&self, &rhs)
            }
        }

        impl $op<&FieldElement> for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $func(self, rhs: &FieldElement) -> FieldElement {
                FieldElement::$inner_func(&self, rhs)
            }
        }

        impl $op<&FieldElement> for &FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $func(self, rhs: &FieldElement) -> FieldElement {
                FieldElement::$inner_func(self, rhs)
            }
        }

        impl $op_assign for FieldElement {
            #[inline]
            fn $func_assign(&mut self, rhs: FieldElement) {
                *self = FieldElement::$inner_func(self, &rhs);
            }
        }

        impl $op_assign<&FieldElement> for FieldElement {
            #[inline]
            fn $func_assign(&mut self, rhs: &FieldElement) {
                *self = FieldElement::$inner_func(self, rhs);
            }
        }
    };
}

field_op!(Add, add, add, AddAssign, add_assign);
field_op!(Sub, sub, sub, SubAssign, sub_assign);
field_op!(Mul, mul, multiply, MulAssign, mul_assign);

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::neg(&self)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::neg(self)
    }
}

impl Sum for FieldElement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a FieldElement> for FieldElement {
    fn sum<I: Iterator<Item = &'a FieldElement>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Product for FieldElement {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a FieldElement> for FieldElement {
    fn product<I: Iterator<Item = &'a FieldElement>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

#[cfg(feature = "serde")]
impl Serialize for FieldElement {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serdect::array::serialize_hex_lower_or_bin(&self.to_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let mut bytes = FieldBytes::default();
        serdect::array::deserialize_hex_or_bin(&mut bytes, deserializer)?;
        Option::from(Self::from_bytes(&bytes))
            .ok_or_else(|| de::Error::custom("field element is not less than the modulus"))
    }
}

#[cfg(test)]
impl FieldElement {
    pub(crate) fn modulus_as_biguint() -> num_bigint::BigUint {
        super::util::bytes_to_biguint(&to_le_bytes(&MODULUS))
    }
}
