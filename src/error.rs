//! Unified error types for the analog subsystem.
//!
//! Reads and writes never fail: unsupported pin/peripheral combinations
//! degrade silently.  Errors only surface while a configuration is loaded
//! or a pin directory is accepted at construction time.
//! All variants are `Copy` so they can be returned from `no_std` init
//! paths without allocation.

use core::fmt;

use crate::analog::PinId;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The boot configuration is invalid or could not be (de)serialised.
    Config(ConfigError),
    /// The pin directory describes hardware the port does not have.
    Pin(PinError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Pin(e) => write!(f, "pin: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Caller-facing read width outside `1..=32`.
    ReadResolution(u8),
    /// Caller-facing write width outside `1..=32`.
    WriteResolution(u8),
    /// The port exposes more timer units than the state can track.
    TooManyTimers(u8),
    /// Stored configuration blob failed to deserialise.
    Decode,
    /// Configuration did not fit the output buffer.
    Encode,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadResolution(bits) => write!(f, "read resolution {bits} bits out of range"),
            Self::WriteResolution(bits) => write!(f, "write resolution {bits} bits out of range"),
            Self::TooManyTimers(n) => write!(f, "{n} timer units exceed tracking capacity"),
            Self::Decode => write!(f, "config blob corrupted"),
            Self::Encode => write!(f, "config buffer too small"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Pin directory errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    /// Descriptor names a timer unit the port does not have.
    TimerOutOfRange { pin: PinId, timer: u8 },
    /// Descriptor names a DAC channel the port does not have.
    DacOutOfRange { pin: PinId, channel: u8 },
    /// Descriptor claims both a DAC channel and a PWM channel.
    ConflictingOutputs { pin: PinId },
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimerOutOfRange { pin, timer } => {
                write!(f, "pin {pin} routed to missing timer unit {timer}")
            }
            Self::DacOutOfRange { pin, channel } => {
                write!(f, "pin {pin} routed to missing DAC channel {channel}")
            }
            Self::ConflictingOutputs { pin } => {
                write!(f, "pin {pin} claims both DAC and PWM output")
            }
        }
    }
}

impl From<PinError> for Error {
    fn from(e: PinError) -> Self {
        Self::Pin(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
