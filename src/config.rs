//! Boot configuration for the analog subsystem.
//!
//! Defaults match the reset state of the core (10-bit reads, 8-bit
//! writes, default reference).  A board may store an override blob in
//! flash and decode it with [`AnalogConfig::from_bytes`].

use serde::{Deserialize, Serialize};

use crate::analog::Reference;
use crate::analog::state::{DEFAULT_READ_RESOLUTION, DEFAULT_WRITE_RESOLUTION};
use crate::error::ConfigError;

/// Widest caller-facing resolution accepted from a stored configuration.
pub const MAX_RESOLUTION_BITS: u8 = 32;

/// Core analog configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalogConfig {
    /// Caller-facing ADC read width (bits)
    pub read_resolution_bits: u8,
    /// Caller-facing DAC/PWM write width (bits)
    pub write_resolution_bits: u8,
    /// ADC voltage reference
    pub reference: Reference,
}

impl Default for AnalogConfig {
    fn default() -> Self {
        Self {
            read_resolution_bits: DEFAULT_READ_RESOLUTION,
            write_resolution_bits: DEFAULT_WRITE_RESOLUTION,
            reference: Reference::Default,
        }
    }
}

impl AnalogConfig {
    /// Reject widths a stored configuration should never contain.
    ///
    /// The runtime setters accept any width; this check only guards the
    /// boot path against corrupted blobs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_RESOLUTION_BITS).contains(&self.read_resolution_bits) {
            return Err(ConfigError::ReadResolution(self.read_resolution_bits));
        }
        if !(1..=MAX_RESOLUTION_BITS).contains(&self.write_resolution_bits) {
            return Err(ConfigError::WriteResolution(self.write_resolution_bits));
        }
        Ok(())
    }

    /// Decode and validate a stored configuration blob.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }

    /// Encode into `buf`, returning the used prefix.
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Encode)
    }
}
