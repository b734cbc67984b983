//! Timeout helpers used across the crate.
//!
//! Centralizes the default OCR timeout so the inspector config, the async
//! inspector and tests agree on one value.

use std::time::Duration;

/// Default OCR timeout in milliseconds. OCR engines can stall on malformed
/// images, so the async inspector never waits longer than this unless told to.
pub const DEFAULT_OCR_TIMEOUT_MS: u64 = 30_000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
