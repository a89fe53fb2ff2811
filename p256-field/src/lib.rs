#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! use p256_field::FieldElement;
//!
//! let x = FieldElement::from_u64(3);
//! let x_inv = x.invert().unwrap();
//!
//! // multiply + reduce, spelled out
//! assert_eq!(x.mul_wide(&x_inv).reduce(), FieldElement::ONE);
//!
//! // or in one step
//! assert_eq!(x * x_inv, FieldElement::ONE);
//! ```
//!
//! ## `serde` support
//!
//! When the `serde` feature of this crate is enabled, `Serialize` and
//! `Deserialize` are impl'd for [`FieldElement`], encoded as lower-case hex
//! in human-readable formats and as 32 little-endian bytes otherwise.

#[cfg(test)]
extern crate std;

mod arithmetic;
mod error;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    arithmetic::{
        field::{FieldElement, MODULUS, MODULUS_HEX, REDUCER},
        wide::WideElement,
    },
    error::{Error, Result},
};
pub use subtle;
pub use zeroize;

/// P-256 field element serialized as 32 bytes, least significant byte first.
pub type FieldBytes = [u8; 32];

/// Unreduced 512-bit value serialized as 64 bytes, least significant byte first.
pub type WideBytes = [u8; 64];

/// Raw fixed-width integer arithmetic, without any modular correction.
///
/// These are the primitives the field operations are built from. They
/// operate on arbitrary 256-bit limb arrays and report overflow through an
/// explicit carry or borrow of `0` or `1` instead of correcting it, so the
/// results are generally not field elements.
pub mod hazmat {
    pub use crate::arithmetic::uint::{
        LIMBS, Limbs, add_raw, ge, is_odd, is_one, is_zero, shr1, sub_raw,
    };
}
