//! Fixed curve data: base point coordinates and a sample operand pair.

use crate::FieldBytes;
use hex_literal::hex;

/// x-coordinate of the P-256 base point G.
pub const GX: FieldBytes =
    hex!("96c298d84539a1f4a033eb2d817d0377f240a463e5e6bcf847422ce1f2d1176b");

/// y-coordinate of the P-256 base point G.
pub const GY: FieldBytes =
    hex!("f551bf376840b6cbce5e316b5733ce2b169e0f7c4aebe78e9b7f1afee242e34f");

/// Curve equation coefficient b of y² = x³ − 3x + b.
pub const B: FieldBytes =
    hex!("4b60d2273e3cce3bf6b053ccb0061d65bc86987655bdebb3e7933aaad835c65a");

/// First sample operand.
pub const SAMPLE_X: FieldBytes =
    hex!("11020304050607081102030405060708110203040506070811020304050607f8");

/// Second sample operand.
pub const SAMPLE_Y: FieldBytes =
    hex!("01c20304050607080102030405060708010203040506070801020304050607f8");

/// Inverse of [`SAMPLE_X`] modulo p.
pub const SAMPLE_X_INV: FieldBytes =
    hex!("99dcd34d8f22665291009f428a5f2ed3c36eb4cf1c25c042022bb521b4762343");

/// Inverse of [`SAMPLE_Y`] modulo p.
pub const SAMPLE_Y_INV: FieldBytes =
    hex!("e8b8e7346632bab0916af3845e5f5e38b835f8a413656c78b53da46e341e8655");

/// [`SAMPLE_X`] + [`SAMPLE_Y`] mod p. The unreduced sum exceeds 2^256.
pub const SAMPLE_SUM: FieldBytes =
    hex!("13c406080a0c0e1012040608090c0e10120406080a0c0e10110406080b0c0ef0");

/// [`SAMPLE_X`] − [`SAMPLE_Y`] mod p.
pub const SAMPLE_DIFF: FieldBytes =
    hex!("1040ffffffffffff0f0000000000000010000000000000001000000000000000");

/// [`SAMPLE_Y`] − [`SAMPLE_X`] mod p.
pub const SAMPLE_DIFF_NEG: FieldBytes =
    hex!("efbf000000000000f0ffffff00000000f0fffffffffffffff0fffffffeffffff");

/// [`SAMPLE_X`] · [`SAMPLE_Y`] mod p.
pub const SAMPLE_PRODUCT: FieldBytes =
    hex!("234b138ce451b92b2eb12c8916d8ef29ff9e3996505c542985e6b79cf5686603");
