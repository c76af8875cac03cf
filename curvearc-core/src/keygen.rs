//! Private key generation and adjustment for every curve family.
//!
//! | Family | Rule |
//! |--------|------|
//! | Montgomery | `private_key_length` random bytes, then RFC 7748 clamping |
//! | Pairing | `private_key_length + wide_reduction_extra_bytes` random bytes reduced modulo the group order |
//! | Edwards, Weierstrass | the curve's own generator |

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use curvearc_primitives::{CurveError, CurveFamily, CurveHandle};
use tracing::debug;

use crate::config::KeyConfig;
use crate::error::{KeyError, Result};
use crate::public_key::check_private_key;
use crate::types::PrivateKey;
use crate::{log_key_generation, log_key_operation_error};

/// Generate a private key for `curve` with the default configuration.
///
/// # Errors
///
/// Returns [`KeyError::KeyGeneration`] if the random-byte source or the
/// curve's key generator fails.
pub fn random_private_key(curve: &dyn CurveHandle) -> Result<PrivateKey> {
    generate(curve, &KeyConfig::default())
}

/// Generate a private key for `curve` with configuration.
///
/// # Errors
///
/// Returns [`KeyError::Validation`] if the configuration is invalid, or
/// [`KeyError::KeyGeneration`] if the random-byte source or the curve's key
/// generator fails.
pub fn random_private_key_with_config(
    curve: &dyn CurveHandle,
    config: &KeyConfig,
) -> Result<PrivateKey> {
    config.validate()?;
    generate(curve, config)
}

/// Apply the curve's bit adjustment to caller-supplied scalar bytes.
///
/// For Montgomery curves this clamps; for every other family the bytes are
/// returned unchanged. The result is checked like any other private key.
///
/// # Errors
///
/// Returns [`KeyError::KeyGeneration`] if `raw` has the wrong length or
/// adjusts to the all-zero key.
pub fn adjust_private_key(curve: &dyn CurveHandle, raw: &[u8]) -> Result<PrivateKey> {
    let mut bytes = raw.to_vec();
    curve.adjust_scalar_bytes(&mut bytes);
    let key = PrivateKey::new(bytes);
    check_private_key(curve.metadata(), key.as_slice())
        .map_err(|e| KeyError::key_generation(curve.name(), e))?;
    Ok(key)
}

fn generate(curve: &dyn CurveHandle, config: &KeyConfig) -> Result<PrivateKey> {
    let metadata = curve.metadata();
    debug!(curve = curve.name(), family = %metadata.family, "Generating private key");

    let sampled = match metadata.family {
        CurveFamily::Montgomery => curve.random_bytes(metadata.private_key_length).map(|mut bytes| {
            curve.adjust_scalar_bytes(&mut bytes);
            bytes
        }),
        CurveFamily::Pairing => curve
            .random_bytes(metadata.private_key_length + config.wide_reduction_extra_bytes)
            .and_then(|wide| curve.hash_to_scalar(&wide)),
        CurveFamily::Edwards | CurveFamily::Weierstrass => curve.random_private_key(),
    };

    let key = sampled.and_then(|mut bytes| {
        let key = PrivateKey::new(std::mem::take(&mut *bytes));
        check_private_key(metadata, key.as_slice())?;
        Ok::<_, CurveError>(key)
    });

    match key {
        Ok(key) => {
            log_key_generation!(curve.name(), metadata.family);
            Ok(key)
        }
        Err(source) => {
            let err = KeyError::key_generation(curve.name(), source);
            log_key_operation_error!("random_private_key", err);
            Err(err)
        }
    }
}
