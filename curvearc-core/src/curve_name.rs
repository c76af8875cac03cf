//! Resolve a curve handle to its canonical name from its metadata.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::fmt;
use std::str::FromStr;

use curvearc_primitives::{
    BLS12_381_FIELD_PRIME, BN254_FIELD_PRIME, CurveFamily, CurveHandle, ED25519_FIELD_PRIME,
    SECP256K1_FIELD_PRIME,
};

use crate::error::{KeyError, Result};

/// Canonical identifiers of the supported curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveName {
    /// Edwards form of Curve25519.
    Ed25519,
    /// Montgomery form of Curve25519.
    X25519,
    /// The SEC 2 Koblitz curve.
    Secp256k1,
    /// BLS12-381, G1 keys.
    Bls12_381,
    /// BN254 (alt_bn128), G1 keys.
    Bn254,
}

impl CurveName {
    /// The identifier as written in JWK `crv` members and logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveName::Ed25519 => "Ed25519",
            CurveName::X25519 => "X25519",
            CurveName::Secp256k1 => "secp256k1",
            CurveName::Bls12_381 => "BLS12-381",
            CurveName::Bn254 => "BN254",
        }
    }

    /// Whether the curve is represented by the JWK `OKP` key type.
    #[must_use]
    pub fn is_okp(&self) -> bool {
        matches!(self, CurveName::Ed25519 | CurveName::X25519)
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveName {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Ed25519" => Ok(CurveName::Ed25519),
            "X25519" => Ok(CurveName::X25519),
            "secp256k1" => Ok(CurveName::Secp256k1),
            "BLS12-381" => Ok(CurveName::Bls12_381),
            "BN254" => Ok(CurveName::Bn254),
            other => Err(KeyError::UnknownCurve(other.to_string())),
        }
    }
}

/// Identify `curve` from its metadata.
///
/// Montgomery curves are told apart by point length, every other family by
/// its base-field prime. The handle's self-reported name is not consulted.
///
/// # Errors
///
/// Returns [`KeyError::UnknownCurve`] if no supported curve matches.
pub fn resolve_curve_name(curve: &dyn CurveHandle) -> Result<CurveName> {
    let metadata = curve.metadata();
    let prime = metadata.field_prime;

    let resolved = match metadata.family {
        CurveFamily::Montgomery => (metadata.point_byte_length == 32).then_some(CurveName::X25519),
        CurveFamily::Edwards => (prime == ED25519_FIELD_PRIME.as_slice()).then_some(CurveName::Ed25519),
        CurveFamily::Weierstrass => {
            (prime == SECP256K1_FIELD_PRIME.as_slice()).then_some(CurveName::Secp256k1)
        }
        CurveFamily::Pairing => {
            if prime == BLS12_381_FIELD_PRIME.as_slice() {
                Some(CurveName::Bls12_381)
            } else if prime == BN254_FIELD_PRIME.as_slice() {
                Some(CurveName::Bn254)
            } else {
                None
            }
        }
    };

    resolved.ok_or_else(|| {
        KeyError::UnknownCurve(format!(
            "{} curve with {}-byte points and {}-byte field",
            metadata.family, metadata.point_byte_length, metadata.field_byte_length
        ))
    })
}
