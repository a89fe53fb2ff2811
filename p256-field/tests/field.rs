//! Field arithmetic tests against the public API.

use hex_literal::hex;
use p256_field::{
    FieldBytes, FieldElement, MODULUS, REDUCER, WideElement,
    hazmat::{add_raw, ge, is_one, is_zero, shr1, sub_raw},
};
use num_bigint::BigUint;
use proptest::prelude::*;

/// x-coordinate of the base point, big-endian.
const GX: FieldBytes = hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");

/// y-coordinate of the base point, big-endian.
const GY: FieldBytes = hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5");

/// Curve coefficient b, big-endian.
const B: FieldBytes = hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");

fn fe_be(bytes: &FieldBytes) -> FieldElement {
    FieldElement::from_be_bytes(bytes).unwrap()
}

fn p_minus_one() -> FieldElement {
    fe_be(&hex!(
        "ffffffff00000001000000000000000000000000fffffffffffffffffffffffe"
    ))
}

#[test]
fn boundary_cases() {
    let one = FieldElement::ONE;
    assert_eq!(p_minus_one() + one, FieldElement::ZERO);
    assert_eq!(FieldElement::ZERO - one, p_minus_one());
    assert_eq!(one.invert().unwrap(), one);
}

#[test]
fn raw_arithmetic_reports_overflow() {
    let (sum, carry) = add_raw(&MODULUS, &REDUCER);
    assert!(is_zero(&sum));
    assert_eq!(carry, 1);

    let (diff, borrow) = sub_raw(&[0; 4], &REDUCER);
    assert_eq!(diff, MODULUS);
    assert_eq!(borrow, 1);

    let (_, borrow) = sub_raw(&MODULUS, &REDUCER);
    assert_eq!(borrow, 0);
    assert!(ge(&MODULUS, &REDUCER));
    assert!(is_one(&shr1(&[2, 0, 0, 0], 0)));
}

#[test]
fn sample_operand_inverse() {
    let mut bytes = [0u8; 32];
    for chunk in bytes.chunks_exact_mut(8) {
        chunk.copy_from_slice(&[0x11, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
    }
    bytes[31] = 0xf8;

    let a = FieldElement::from_bytes(&bytes).unwrap();
    let b = a.invert().unwrap();
    assert_eq!(a.mul_wide(&b).reduce(), FieldElement::ONE);
}

#[test]
fn generator_is_on_curve() {
    let x = fe_be(&GX);
    let y = fe_be(&GY);
    let b = fe_be(&B);
    let three = FieldElement::from_u64(3);

    let lhs = y.square();
    let rhs = x.square() * x - three * x + b;
    assert_eq!(lhs, rhs);
}

#[test]
fn big_endian_round_trip() {
    assert_eq!(fe_be(&GX).to_be_bytes(), GX);

    let mut le = GX;
    le.reverse();
    assert_eq!(fe_be(&GX).to_bytes(), le);
}

#[test]
fn rejects_non_canonical_encodings() {
    let p = hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
    assert!(bool::from(FieldElement::from_be_bytes(&p).is_none()));
    assert!(FieldElement::from_slice(&[0u8; 16]).is_err());
}

#[test]
fn wide_reduce_matches_field_mul() {
    let x = fe_be(&GX);
    let y = fe_be(&GY);
    let wide: WideElement = x.mul_wide(&y);
    assert_eq!(FieldElement::from(wide), x * y);
    assert_eq!(WideElement::from_bytes(&wide.to_bytes()), wide);
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let x = fe_be(&GX);
    let json = serde_json::to_string(&x).unwrap();
    let mut le = GX;
    le.reverse();
    assert_eq!(json, format!("\"{}\"", hex_lower(&le)));
    assert_eq!(serde_json::from_str::<FieldElement>(&json).unwrap(), x);

    let too_big = format!("\"{}\"", hex_lower(&[0xff; 32]));
    assert!(serde_json::from_str::<FieldElement>(&too_big).is_err());
}

#[cfg(feature = "serde")]
fn hex_lower(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

prop_compose! {
    fn field_element()(bytes in any::<[u8; 32]>()) -> FieldElement {
        let mut res = BigUint::from_bytes_le(&bytes);
        let p = BigUint::parse_bytes(p256_field::MODULUS_HEX.as_bytes(), 16).unwrap();
        // 2^256 < 2p, so one subtraction is enough.
        if res >= p {
            res -= p;
        }

        let mut le = [0u8; 32];
        let digits = res.to_bytes_le();
        le[..digits.len()].copy_from_slice(&digits);
        FieldElement::from_bytes(&le).unwrap()
    }
}

proptest! {
    #[test]
    fn sub_undoes_add(a in field_element(), b in field_element()) {
        prop_assert_eq!((a + b) - b, a);
    }

    #[test]
    fn add_is_commutative(a in field_element(), b in field_element()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn add_is_associative(a in field_element(), b in field_element(), c in field_element()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn mul_by_one_is_identity(a in field_element()) {
        prop_assert_eq!(a.mul_wide(&FieldElement::ONE).reduce(), a);
    }

    #[test]
    fn mul_distributes_over_add(a in field_element(), b in field_element(), c in field_element()) {
        prop_assert_eq!(a * (b + c), a * b + a * c);
    }

    #[test]
    fn invert_is_inverse(a in field_element()) {
        prop_assume!(!bool::from(a.is_zero()));
        let inv = a.invert().unwrap();
        prop_assert_eq!(a.mul_wide(&inv).reduce(), FieldElement::ONE);
        prop_assert_eq!(inv.invert().unwrap(), a);
    }

    #[test]
    fn encoding_round_trips(a in field_element()) {
        prop_assert_eq!(FieldElement::from_bytes(&a.to_bytes()).unwrap(), a);
        prop_assert_eq!(FieldElement::from_be_bytes(&a.to_be_bytes()).unwrap(), a);
    }
}
