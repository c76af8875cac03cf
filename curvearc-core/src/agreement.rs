//! Guarded Diffie-Hellman key agreement.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use curvearc_primitives::{CurveFamily, EcKeyAgreement};
use tracing::warn;

use crate::config::KeyConfig;
use crate::error::{KeyError, Result};
use crate::public_key::check_private_key;
use crate::small_order::{MONTGOMERY_POINT_SIZE, is_small_order_point};
use crate::types::SharedSecret;
use crate::{log_key_operation_complete, log_key_operation_error, log_key_operation_start};

/// Compute the shared secret with the default configuration.
///
/// The small-order guard matches the table encodings byte for byte. A
/// degenerate peer in another encoding, e.g. with bit 255 set, passes the
/// guard and is then refused by the curve as
/// [`CurveError::NonContributory`](curvearc_primitives::CurveError::NonContributory)
/// inside [`KeyError::KeyAgreement`]. Either error kind means the peer key is
/// unusable.
///
/// # Errors
///
/// Returns [`KeyError::Validation`] for a small-order Montgomery peer key in
/// table encoding and [`KeyError::KeyAgreement`] for any other failure.
pub fn get_shared_secret(
    curve: &dyn EcKeyAgreement,
    private_key: &[u8],
    peer_public_key: &[u8],
) -> Result<SharedSecret> {
    agree(curve, private_key, peer_public_key, &KeyConfig::default())
}

/// Compute the shared secret with configuration.
///
/// # Errors
///
/// Returns [`KeyError::Validation`] if the configuration is invalid or the
/// peer key is small-order and `reject_small_order_peers` is set, and
/// [`KeyError::KeyAgreement`] for any other failure.
pub fn get_shared_secret_with_config(
    curve: &dyn EcKeyAgreement,
    private_key: &[u8],
    peer_public_key: &[u8],
    config: &KeyConfig,
) -> Result<SharedSecret> {
    config.validate()?;
    agree(curve, private_key, peer_public_key, config)
}

fn agree(
    curve: &dyn EcKeyAgreement,
    private_key: &[u8],
    peer_public_key: &[u8],
    config: &KeyConfig,
) -> Result<SharedSecret> {
    log_key_operation_start!("get_shared_secret", curve = curve.name(), peer_len = peer_public_key.len());
    let metadata = curve.metadata();

    check_private_key(metadata, private_key)
        .map_err(|e| KeyError::key_agreement(curve.name(), e))?;

    if config.reject_small_order_peers
        && metadata.family == CurveFamily::Montgomery
        && peer_public_key.len() == MONTGOMERY_POINT_SIZE
        && is_small_order_point(peer_public_key)?
    {
        warn!(curve = curve.name(), "Rejected small-order peer public key");
        return Err(KeyError::Validation("peer public key has small order".to_string()));
    }

    match curve.get_shared_secret(private_key, peer_public_key) {
        Ok(mut shared) => {
            log_key_operation_complete!("get_shared_secret", secret_len = shared.len());
            Ok(SharedSecret::new(std::mem::take(&mut *shared)))
        }
        Err(source) => {
            let err = KeyError::key_agreement(curve.name(), source);
            log_key_operation_error!("get_shared_secret", err);
            Err(err)
        }
    }
}
