//! # CurveArc Core
//!
//! The unified curve key layer. Sits on top of the curve handles in
//! `curvearc-primitives` and gives every curve family the same key contract:
//!
//! - **Key generation**: family-specific rules (clamping for Montgomery,
//!   wide reduction for pairing-friendly curves)
//! - **Public key derivation**: one error kind for every failure, with a
//!   compression policy for single-encoding curves
//! - **Small-order detection**: the seven Curve25519 points that collapse
//!   X25519 output
//! - **Guarded key agreement**: refuses small-order peers before DH
//! - **Curve name resolution**: from metadata, never from caller labels
//! - **JWK**: OKP key pairs with exact round-trip and `x`/`d` consistency
//!
//! ## Quick Start
//!
//! ```rust
//! use curvearc_core::{from_jwk, get_public_key, get_shared_secret, random_private_key, to_jwk};
//! use curvearc_primitives::X25519Curve;
//!
//! # fn main() -> curvearc_core::Result<()> {
//! let curve = X25519Curve::with_os_rng();
//!
//! let alice = random_private_key(&curve)?;
//! let bob = random_private_key(&curve)?;
//! let bob_public = get_public_key(&curve, bob.as_slice())?;
//!
//! let shared = get_shared_secret(&curve, alice.as_slice(), &bob_public)?;
//! assert_eq!(shared.len(), 32);
//!
//! let jwk = to_jwk(&curve, alice.as_slice())?;
//! assert_eq!(from_jwk(&curve, &jwk)?, alice);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Guarded Diffie-Hellman.
pub mod agreement;
/// Key layer configuration.
pub mod config;
/// Curve name resolution.
pub mod curve_name;
/// Error taxonomy.
pub mod error;
/// OKP JWK codec.
pub mod jwk;
/// Private key generation and adjustment.
pub mod keygen;
/// Tracing setup and log sanitization.
pub mod logging;
/// Public key derivation.
pub mod public_key;
/// Small-order point detection.
pub mod small_order;
/// Key material types.
pub mod types;

pub use agreement::{get_shared_secret, get_shared_secret_with_config};
pub use config::KeyConfig;
pub use curve_name::{CurveName, resolve_curve_name};
pub use error::{KeyError, Result};
pub use jwk::{
    OKP_KEY_TYPE, OkpJwk, from_jwk, from_jwk_private_key, from_jwk_public_key,
    from_jwk_with_config, to_jwk, to_jwk_private_key, to_jwk_public_key,
};
pub use keygen::{adjust_private_key, random_private_key, random_private_key_with_config};
pub use logging::{init_tracing, sanitize_data};
pub use public_key::{UNCOMPRESSED_NOT_SUPPORTED, get_public_key, get_public_key_with_compression};
pub use small_order::{is_small_order_point, small_order_points};
pub use types::{PrivateKey, PublicKey, SharedSecret, ZeroizedBytes};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
