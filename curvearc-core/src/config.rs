//! Configuration for the curve key layer.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::error::{KeyError, Result};

/// Smallest accepted number of extra bytes for wide scalar reduction.
pub const MIN_WIDE_REDUCTION_EXTRA_BYTES: usize = 16;

/// Largest accepted number of extra bytes for wide scalar reduction.
pub const MAX_WIDE_REDUCTION_EXTRA_BYTES: usize = 64;

/// Key layer configuration settings.
///
/// # Examples
/// ```rust
/// use curvearc_core::config::KeyConfig;
///
/// let config = KeyConfig::new()
///     .with_wide_reduction_extra_bytes(32)
///     .with_require_jwk_public_key(false)
///     .build()
///     .expect("valid config");
/// assert_eq!(config.wide_reduction_extra_bytes, 32);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyConfig {
    /// Bytes drawn on top of the scalar length before reducing a
    /// pairing-curve private key modulo the group order.
    ///
    /// Default: `16`
    pub wide_reduction_extra_bytes: usize,

    /// Whether Montgomery key agreement refuses small-order peer keys.
    ///
    /// Default: `true`
    pub reject_small_order_peers: bool,

    /// Whether JWK decoding requires the `x` member.
    ///
    /// When disabled, a private JWK without `x` is accepted and the public
    /// key is derived from `d`.
    /// Default: `true`
    pub require_jwk_public_key: bool,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            wide_reduction_extra_bytes: MIN_WIDE_REDUCTION_EXTRA_BYTES,
            reject_small_order_peers: true,
            require_jwk_public_key: true,
        }
    }
}

impl KeyConfig {
    /// Create a new configuration with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wide-reduction extra byte count and return self for method chaining.
    #[must_use]
    pub fn with_wide_reduction_extra_bytes(mut self, extra: usize) -> Self {
        self.wide_reduction_extra_bytes = extra;
        self
    }

    /// Set small-order peer rejection and return self for method chaining.
    #[must_use]
    pub fn with_reject_small_order_peers(mut self, enabled: bool) -> Self {
        self.reject_small_order_peers = enabled;
        self
    }

    /// Set whether JWKs must carry `x` and return self for method chaining.
    #[must_use]
    pub fn with_require_jwk_public_key(mut self, required: bool) -> Self {
        self.require_jwk_public_key = required;
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Validation`] if the configuration is invalid.
    pub fn build(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration settings.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Validation`] if `wide_reduction_extra_bytes` is
    /// outside `16..=64`.
    pub fn validate(&self) -> Result<()> {
        let range = MIN_WIDE_REDUCTION_EXTRA_BYTES..=MAX_WIDE_REDUCTION_EXTRA_BYTES;
        if !range.contains(&self.wide_reduction_extra_bytes) {
            return Err(KeyError::Validation(format!(
                "wide_reduction_extra_bytes must be in {MIN_WIDE_REDUCTION_EXTRA_BYTES}..={MAX_WIDE_REDUCTION_EXTRA_BYTES}, got {}",
                self.wide_reduction_extra_bytes
            )));
        }
        Ok(())
    }
}
