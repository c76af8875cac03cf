#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # BLS12-381 Curve Handle
//!
//! BLS12-381 G1 keys using the ark-bls12-381 crate. Public keys are 48-byte
//! compressed or 96-byte uncompressed G1 points, as used by Ethereum 2.0
//! and Zcash.

use ark_bls12_381::Bls12_381;

use super::pairing::PairingCurve;
use super::traits::{CurveFamily, CurveMetadata};
use crate::rand::{SharedRandomSource, os_random};

/// BLS12-381 base-field prime, big-endian
pub const BLS12_381_FIELD_PRIME: [u8; 48] = [
    0x1a, 0x01, 0x11, 0xea, 0x39, 0x7f, 0xe6, 0x9a, 0x4b, 0x1b, 0xa7, 0xb6, 0x43, 0x4b, 0xac, 0xd7,
    0x64, 0x77, 0x4b, 0x84, 0xf3, 0x85, 0x12, 0xbf, 0x67, 0x30, 0xd2, 0xa0, 0xf6, 0xb0, 0xf6, 0x24,
    0x1e, 0xab, 0xff, 0xfe, 0xb1, 0x53, 0xff, 0xff, 0xb9, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xaa, 0xab,
];

/// Compressed G1 point size
pub const BLS12_381_G1_COMPRESSED_SIZE: usize = 48;

/// Uncompressed G1 point size
pub const BLS12_381_G1_UNCOMPRESSED_SIZE: usize = 96;

static METADATA: CurveMetadata = CurveMetadata {
    family: CurveFamily::Pairing,
    field_prime: &BLS12_381_FIELD_PRIME,
    field_byte_length: 48,
    private_key_length: super::pairing::PAIRING_SCALAR_SIZE,
    point_byte_length: BLS12_381_G1_COMPRESSED_SIZE,
    uncompressed_point_byte_length: Some(BLS12_381_G1_UNCOMPRESSED_SIZE),
};

/// BLS12-381 curve handle
pub type Bls12_381Curve = PairingCurve<Bls12_381>;

impl PairingCurve<Bls12_381> {
    /// Bind a handle to `source`.
    #[must_use]
    pub fn new(source: SharedRandomSource) -> Self {
        Self::from_parts(source, &METADATA, "BLS12-381")
    }

    /// Bind a handle to the operating system CSPRNG.
    #[must_use]
    pub fn with_os_rng() -> Self {
        Self::new(os_random())
    }
}
