//! secp256r1 field test vectors.
//!
//! All byte strings are little-endian, matching [`FieldBytes`](crate::FieldBytes)
//! and [`WideBytes`](crate::WideBytes).

pub mod curve;
pub mod field;
