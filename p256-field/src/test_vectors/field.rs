//! Field arithmetic test vectors.

use crate::{FieldBytes, WideBytes};
use hex_literal::hex;

/// Field modulus p.
pub const MODULUS: FieldBytes =
    hex!("ffffffffffffffffffffffff00000000000000000000000001000000ffffffff");

/// 2^256 mod p.
pub const REDUCER: FieldBytes =
    hex!("010000000000000000000000fffffffffffffffffffffffffeffffff00000000");

/// Exponent of the first entry of [`DBL_TEST_VECTORS`].
pub const DBL_TEST_VECTORS_START: u64 = 250;

/// Repeated doubling crossing 2^256: entry `i` is 2^(250 + i) mod p.
pub const DBL_TEST_VECTORS: &[FieldBytes] = &[
    hex!("0000000000000000000000000000000000000000000000000000000000000004"),
    hex!("0000000000000000000000000000000000000000000000000000000000000008"),
    hex!("0000000000000000000000000000000000000000000000000000000000000010"),
    hex!("0000000000000000000000000000000000000000000000000000000000000020"),
    hex!("0000000000000000000000000000000000000000000000000000000000000040"),
    hex!("0000000000000000000000000000000000000000000000000000000000000080"),
    hex!("010000000000000000000000fffffffffffffffffffffffffeffffff00000000"),
    hex!("020000000000000000000000fefffffffffffffffffffffffdffffff01000000"),
    hex!("040000000000000000000000fcfffffffffffffffffffffffbffffff03000000"),
    hex!("080000000000000000000000f8fffffffffffffffffffffff7ffffff07000000"),
    hex!("100000000000000000000000f0ffffffffffffffffffffffefffffff0f000000"),
    hex!("200000000000000000000000e0ffffffffffffffffffffffdfffffff1f000000"),
    hex!("400000000000000000000000c0ffffffffffffffffffffffbfffffff3f000000"),
];

/// Pairs of (512-bit input, input mod p).
pub const REDUCE_TEST_VECTORS: &[(WideBytes, FieldBytes)] = &[
    (
        hex!(
            "63a660ab0acdc7e3b5ca230343b5e0e743fbeff53c269aa71389d683207257a6"
            "ef9c57bd1fc288297493d0cf2b817740c63a4c5321e59b5c17bed0e4b3864d25"
        ),
        hex!("48a610bdebbd1a2369b5b1ac842cd65f96a33741c2de783fd3569ff2a46e6713"),
    ),
    (
        hex!(
            "315576abd09f51472e89023837f9a8b33daf99cd5431b12ba896c9a39ddc3659"
            "008717a4a3b72276aefa587c7ff04b4ee96d6ed3eccc2029292b1f876759ebbc"
        ),
        hex!("583db6f3bb9233f9dd227c95e7ea1849c09d5b5bba8f777e3a59e4c1d349dc6c"),
    ),
    (
        hex!(
            "b48f7a4895f3a5e957f58d7dca504d9308d9412f591d6a5b0798656cca3edd11"
            "616f49600d1123feed1e2110c4da29792929f8b86c0b2e530c68a50023a66ef0"
        ),
        hex!("be98f120cbe0affa6cd596c27d3de4fb447aef39bcb0346a6fa7f443507201ae"),
    ),
    (
        hex!(
            "b5ef8244664a981df735bc98247d5b7cbf8c22de17d13828c27a351c0015c9f0"
            "89926c90861cecbefcbdbce5963dbca86815649685f233535e3d9359cabe2223"
        ),
        hex!("e21bf4a7d220f35bdc424b57cea754db76ff3c6616f47016e7f30f7367e08c72"),
    ),
];
