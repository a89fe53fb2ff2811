//! Fixed-width arithmetic over the P-256 base field.
//!
//! Layered leaf-first: [`util`] word primitives, [`uint`] raw 256-bit
//! carry/borrow arithmetic, [`field`] modulus-corrected field operations and
//! inversion, [`wide`] 512-bit products and their fast reduction.

pub(crate) mod field;
pub(crate) mod uint;
pub(crate) mod util;
pub(crate) mod wide;
