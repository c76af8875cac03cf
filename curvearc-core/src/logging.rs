//! # CurveArc Logging Utilities
//!
//! Structured logging for the key layer with tracing. Key material never
//! reaches a log line: byte strings are rendered through [`sanitize_data`],
//! which shows only their length.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use curvearc_core::logging::{init_tracing, sanitize_data};
//!
//! // Sets the global tracing subscriber; call once per process
//! init_tracing().expect("Failed to init tracing");
//!
//! let key_data = b"sensitive_key_material";
//! tracing::info!("Key operation completed: {}", sanitize_data(key_data));
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::fmt;

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "curvearc=info";

/// Initialize tracing with security-conscious defaults.
///
/// Sets up structured logging with:
/// - Environment-based filtering (`RUST_LOG`, default `curvearc=info`)
/// - Compact single-line output
///
/// # Errors
///
/// Returns an error if the tracing subscriber cannot be initialized,
/// typically due to a subscriber already being set.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init()?;

    info!("CurveArc logging initialized");
    Ok(())
}

/// Wrap bytes so that formatting them reveals only their length.
#[must_use]
pub fn sanitize_data(data: &[u8]) -> SanitizedData<'_> {
    SanitizedData(data)
}

/// Display wrapper produced by [`sanitize_data`].
pub struct SanitizedData<'a>(&'a [u8]);

impl fmt::Display for SanitizedData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} bytes]", self.0.len())
    }
}

impl fmt::Debug for SanitizedData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Log a key operation start.
#[macro_export]
macro_rules! log_key_operation_start {
    ($op:expr, $($field:tt)*) => {
        tracing::trace!(target: "curvearc::key", operation = $op, phase = "start", $($field)*);
    };
    ($op:expr) => {
        tracing::trace!(target: "curvearc::key", operation = $op, phase = "start");
    };
}

/// Log a key operation completion.
#[macro_export]
macro_rules! log_key_operation_complete {
    ($op:expr, $($field:tt)*) => {
        tracing::trace!(target: "curvearc::key", operation = $op, phase = "complete", $($field)*);
    };
    ($op:expr) => {
        tracing::trace!(target: "curvearc::key", operation = $op, phase = "complete");
    };
}

/// Log a key operation failure.
///
/// Failures the caller can trigger with bad input log at DEBUG; the error is
/// returned to them anyway.
#[macro_export]
macro_rules! log_key_operation_error {
    ($op:expr, $error:expr) => {
        tracing::debug!(target: "curvearc::key", operation = $op, error = %$error, phase = "error");
    };
}

/// Log key generation
#[macro_export]
macro_rules! log_key_generation {
    ($curve:expr, $family:expr) => {
        tracing::info!(target: "curvearc::key", curve = %$curve, family = %$family, "Generated private key");
    };
}
