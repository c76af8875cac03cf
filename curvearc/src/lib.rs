#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! CurveArc - Unified Elliptic-Curve Key Layer
//!
//! One key contract for every curve family the library supports. Callers pick
//! a curve handle and use the same functions to generate private keys, derive
//! public keys, check peers and move keys in and out of JWK.
//!
//! ## Key Pair and Agreement
//!
//! ```rust
//! use curvearc::{X25519Curve, get_public_key, get_shared_secret, random_private_key};
//!
//! # fn main() -> curvearc::Result<()> {
//! let curve = X25519Curve::with_os_rng();
//!
//! let alice = random_private_key(&curve)?;
//! let bob = random_private_key(&curve)?;
//! let alice_public = get_public_key(&curve, alice.as_slice())?;
//! let bob_public = get_public_key(&curve, bob.as_slice())?;
//!
//! assert_eq!(
//!     get_shared_secret(&curve, alice.as_slice(), &bob_public)?,
//!     get_shared_secret(&curve, bob.as_slice(), &alice_public)?,
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Compression Policy
//!
//! Montgomery curves have a single encoding, so asking for an uncompressed
//! public key is a policy error rather than a silent fallback:
//!
//! ```rust
//! use curvearc::{KeyError, X25519Curve, get_public_key_with_compression, random_private_key};
//!
//! # fn main() -> curvearc::Result<()> {
//! let curve = X25519Curve::with_os_rng();
//! let sk = random_private_key(&curve)?;
//! assert!(matches!(
//!     get_public_key_with_compression(&curve, sk.as_slice(), false),
//!     Err(KeyError::Policy(_))
//! ));
//! # Ok(())
//! # }
//! ```
//!
//! ## JWK Storage
//!
//! ```rust
//! use curvearc::{Ed25519Curve, OkpJwk, from_jwk, random_private_key, to_jwk};
//!
//! # fn main() -> curvearc::Result<()> {
//! let curve = Ed25519Curve::with_os_rng();
//! let sk = random_private_key(&curve)?;
//!
//! let json = to_jwk(&curve, sk.as_slice())?.to_json()?;
//! let restored = from_jwk(&curve, &OkpJwk::from_json(&json)?)?;
//! assert_eq!(restored, sk);
//! # Ok(())
//! # }
//! ```
//!
//! ## Pairing-Friendly Curves
//!
//! BLS12-381 and BN254 private keys are wide random strings reduced into the
//! scalar field. Public keys are G1 points, compressed by default:
//!
//! ```rust
//! use curvearc::{Bls12_381Curve, get_public_key, get_public_key_with_compression, random_private_key};
//!
//! # fn main() -> curvearc::Result<()> {
//! let curve = Bls12_381Curve::with_os_rng();
//! let sk = random_private_key(&curve)?;
//! assert_eq!(get_public_key(&curve, sk.as_slice())?.len(), 48);
//! assert_eq!(get_public_key_with_compression(&curve, sk.as_slice(), false)?.len(), 96);
//! # Ok(())
//! # }
//! ```

pub use curvearc_core as core;
pub use curvearc_primitives as primitives;

// ============================================================================
// Curve Handles
// ============================================================================

pub use curvearc_primitives::{
    Bls12_381Curve, Bn254Curve, CurveError, CurveFamily, CurveHandle, CurveMetadata,
    EcKeyAgreement, EcSignature, Ed25519Curve, OsRandom, PairingCurve, RandomError, RandomSource,
    SeededRandom, Secp256k1Curve, SharedRandomSource, X25519Curve, os_random,
};

// ============================================================================
// Key Layer
// ============================================================================

pub use curvearc_core::{
    CurveName, KeyConfig, KeyError, PrivateKey, PublicKey, Result, SharedSecret, VERSION,
    ZeroizedBytes,
};

// Key generation
pub use curvearc_core::{adjust_private_key, random_private_key, random_private_key_with_config};

// Public keys and peer checks
pub use curvearc_core::{
    UNCOMPRESSED_NOT_SUPPORTED, get_public_key, get_public_key_with_compression,
    is_small_order_point, small_order_points,
};

// Key agreement
pub use curvearc_core::{get_shared_secret, get_shared_secret_with_config};

// Curve names and JWK
pub use curvearc_core::{
    OKP_KEY_TYPE, OkpJwk, from_jwk, from_jwk_private_key, from_jwk_public_key,
    from_jwk_with_config, resolve_curve_name, to_jwk, to_jwk_private_key, to_jwk_public_key,
};

// Logging
pub use curvearc_core::{init_tracing, sanitize_data};
