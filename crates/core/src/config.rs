//! Configuration for the division pipeline model.
//!
//! This module defines the configuration structure used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** The hardware baseline (37-cycle division latency).
//! 2. **Structure:** A flat config covering timing and observability.
//!
//! Configuration is supplied via JSON from the embedding emulator, or use
//! `Config::default()` for in-process construction.

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the division pipelines.
///
/// These values define the baseline hardware configuration when not
/// explicitly overridden.
mod defaults {
    /// Issue-to-result latency of a division in CPU cycles.
    ///
    /// Matches the R5900: both pipes complete DIV/DIVU 37 cycles after
    /// issue.
    pub const DIV_LATENCY: u64 = crate::common::constants::DIV_LATENCY;
}

/// Division pipeline configuration.
///
/// # Examples
///
/// ```
/// use divsim_core::Config;
///
/// let json = r#"{
///     "div_latency": 12,
///     "trace_divides": true
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.div_latency, 12);
/// assert!(config.trace_divides);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Issue-to-result latency of a division in CPU cycles.
    #[serde(default = "Config::default_div_latency")]
    pub div_latency: u64,

    /// Emit a `tracing` event on every issue, stall, and overwrite.
    #[serde(default)]
    pub trace_divides: bool,
}

impl Config {
    /// Returns the default division latency.
    fn default_div_latency() -> u64 {
        defaults::DIV_LATENCY
    }

    /// Deserializes and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the input is not valid
    /// configuration JSON, or [`ConfigError::ZeroLatency`] if the latency
    /// is zero.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration describes a representable pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroLatency`] if `div_latency` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.div_latency == 0 {
            return Err(ConfigError::ZeroLatency);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            div_latency: defaults::DIV_LATENCY,
            trace_divides: false,
        }
    }
}
