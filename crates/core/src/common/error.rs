//! Configuration error definitions.
//!
//! The pipeline units themselves never fail: divide-by-zero and early
//! collects are documented hardware outcomes, and re-issuing over an
//! in-flight division silently overwrites it. The only fallible surface
//! is configuration loading.

use thiserror::Error;

/// Errors produced while loading or validating a [`crate::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The supplied configuration JSON could not be deserialized.
    #[error("malformed configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured division latency was zero.
    ///
    /// The pipeline model needs at least one cycle between issue and
    /// result; the real unit takes 37.
    #[error("div_latency must be at least 1 cycle")]
    ZeroLatency,
}
