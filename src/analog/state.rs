//! Process-wide analog subsystem state.
//!
//! Owned by [`AnalogIo`](super::service::AnalogIo) and handed to each
//! controller operation explicitly.  Nothing here survives a restart.

use super::capability::TimerId;
use super::resolution::NativeResolution;

/// Upper bound on timer units a port may expose.
pub const MAX_TIMER_UNITS: usize = 8;

pub const DEFAULT_READ_RESOLUTION: u8 = 10;
pub const DEFAULT_WRITE_RESOLUTION: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalogState {
    /// Caller-facing ADC read width.
    pub read_resolution_bits: u8,
    /// Width currently programmed into the ADC.
    pub native_resolution: NativeResolution,
    /// Caller-facing DAC/PWM write width.
    pub write_resolution_bits: u8,
    /// One flag per timer unit: prescaler/waveform/period already written.
    timer_configured: [bool; MAX_TIMER_UNITS],
}

impl AnalogState {
    pub const fn new() -> Self {
        Self {
            read_resolution_bits: DEFAULT_READ_RESOLUTION,
            native_resolution: NativeResolution::Bits10,
            write_resolution_bits: DEFAULT_WRITE_RESOLUTION,
            timer_configured: [false; MAX_TIMER_UNITS],
        }
    }

    pub fn is_timer_configured(&self, timer: TimerId) -> bool {
        self.timer_configured
            .get(timer.index())
            .copied()
            .unwrap_or(false)
    }

    pub(crate) fn mark_timer_configured(&mut self, timer: TimerId) {
        if let Some(flag) = self.timer_configured.get_mut(timer.index()) {
            *flag = true;
        }
    }
}

impl Default for AnalogState {
    fn default() -> Self {
        Self::new()
    }
}
