//! Port traits: the boundary between the analog core and the hardware.
//!
//! ```text
//!   Samd21Port / Samd51Port ──▶ AnalogHardwarePort ──▶ AnalogIo (core)
//!   board pin table         ──▶ PinDirectory       ──▶
//!   GPIO service            ──▶ PinRouter + DigitalOutput
//! ```
//!
//! Each hardware method names one register field or one status bit.
//! Sequencing (what is written in which order, and where the sync
//! barriers go) lives in the controllers, so a simulated port in the host
//! tests exercises exactly the code that runs on the chip.
//!
//! ## Busy predicates
//!
//! `*_busy` methods take `&self` and must be side-effect free on real
//! hardware; they are polled in a tight loop by
//! [`await_clear`](super::sync::await_clear).

use embedded_hal::digital::PinState;
use serde::{Deserialize, Serialize};

use super::capability::{DacChannel, PinDescriptor, PinId, TimerId};
use super::resolution::NativeResolution;

// ───────────────────────────────────────────────────────────────
// Shared hardware vocabulary
// ───────────────────────────────────────────────────────────────

/// ADC voltage reference selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Reference {
    /// VDDANA / 2 with a /2 input gain (full-scale ≈ VDDANA).
    #[default]
    Default,
    /// Same selection as [`Reference::Internal2V23`].
    Internal,
    /// Externally supplied reference on the AREFA pin.
    External,
    /// VDDANA / 1.48 (≈ 2.23 V at 3.3 V).
    Internal2V23,
    /// Internal 1.0 V bandgap.
    Internal1V0,
    /// VDDANA / 2 (≈ 1.65 V at 3.3 V).
    Internal1V65,
}

/// Which ADC register write is being synchronised.
///
/// Layouts with a single sync flag ignore the distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcSync {
    InputControl,
    Enable,
    Resolution,
    Reference,
    Trigger,
}

/// Which DAC register write is being synchronised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DacSync {
    Enable,
    Data(DacChannel),
}

/// Which timer register write is being synchronised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSync {
    /// Generic clock routed to the unit and running.
    Clock,
    Enable,
    /// Prescaler / waveform configuration.
    Control,
    Compare,
    Period,
    /// The lock-update command register.
    UpdateLock,
}

/// Hardware class of a timer/counter unit.
///
/// Decides how a compare value is updated once the unit is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerClass {
    /// 8-bit counter: compare registers are written directly.
    Counter8,
    /// Wide counter/compare unit: compare values go through the buffer
    /// registers under a lock-update flag and land on the next period.
    Wide,
}

/// Peripheral function a pin is multiplexed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinFunction {
    Analog,
    TimerPrimary,
    TimerAlternate,
}

/// Digital pin direction/pull configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Input,
    InputPullUp,
    Output,
}

// ───────────────────────────────────────────────────────────────
// Hardware ports (driven adapters: core → registers)
// ───────────────────────────────────────────────────────────────

/// The single shared ADC engine.
pub trait AdcPort {
    fn adc_busy(&self, sync: AdcSync) -> bool;

    /// Select the positive input multiplexer channel.
    fn adc_select_input(&mut self, channel: u8);

    fn adc_set_enabled(&mut self, enabled: bool);

    /// Issue a software start-of-conversion.
    fn adc_trigger(&mut self);

    /// Clear the "result ready" interrupt flag (write-one-to-clear).
    fn adc_clear_result_ready(&mut self);

    fn adc_result_ready(&self) -> bool;

    /// Raw result register.
    fn adc_result(&self) -> u16;

    fn adc_set_resolution(&mut self, resolution: NativeResolution);

    /// Write the reference selection and matching input gain.
    fn adc_set_reference(&mut self, reference: Reference);
}

/// The DAC channels.
pub trait DacPort {
    /// Number of DAC channels on this layout.
    const DAC_CHANNELS: u8;

    /// `true` when the layout must enable a channel before its data
    /// register accepts a value.
    const DAC_ENABLE_BEFORE_DATA: bool = false;

    fn dac_busy(&self, sync: DacSync) -> bool;

    /// Channel has finished its start-up and accepts conversions.
    fn dac_ready(&self, channel: DacChannel) -> bool;

    fn dac_is_enabled(&self, channel: DacChannel) -> bool;

    fn dac_set_enabled(&mut self, channel: DacChannel, enabled: bool);

    fn dac_write_data(&mut self, channel: DacChannel, value: u16);
}

/// The timer/counter units usable for PWM.
pub trait TimerPort {
    /// Number of timer units addressable through [`TimerId`].
    const TIMER_UNITS: u8;

    fn timer_class(&self, timer: TimerId) -> TimerClass;

    fn timer_busy(&self, timer: TimerId, sync: TimerSync) -> bool;

    /// Route clock generator 0 to the unit.
    fn timer_connect_clock(&mut self, timer: TimerId);

    fn timer_set_enabled(&mut self, timer: TimerId, enabled: bool);

    /// Prescaler /256, normal-PWM waveform (and 8-bit mode where needed).
    fn timer_configure_pwm(&mut self, timer: TimerId);

    /// Write a live compare register.
    fn timer_set_compare(&mut self, timer: TimerId, channel: u8, value: u32);

    fn timer_set_period(&mut self, timer: TimerId, period: u32);

    /// Write a buffered compare register (applied at the next period).
    fn timer_set_compare_buffered(&mut self, timer: TimerId, channel: u8, value: u32);

    /// Assert or release the lock-update flag.
    fn timer_set_update_lock(&mut self, timer: TimerId, locked: bool);
}

/// Everything the analog core needs from the chip.
///
/// Implemented automatically for any type providing the three peripheral
/// ports; the chip adapters in [`crate::adapters`] are the production
/// implementations.
pub trait AnalogHardwarePort: AdcPort + DacPort + TimerPort {}

impl<T: AdcPort + DacPort + TimerPort> AnalogHardwarePort for T {}

// ───────────────────────────────────────────────────────────────
// External collaborators
// ───────────────────────────────────────────────────────────────

/// Read-only table mapping logical pins to physical descriptors.
pub trait PinDirectory {
    fn lookup(&self, pin: PinId) -> Option<PinDescriptor>;

    /// Number of logical pins; descriptors live at `0..pin_count()`.
    fn pin_count(&self) -> PinId;

    /// Map a caller's analog pin number to the board pin it names.
    fn analog_pin(&self, pin: PinId) -> PinId {
        pin
    }
}

impl PinDirectory for &[PinDescriptor] {
    fn lookup(&self, pin: PinId) -> Option<PinDescriptor> {
        self.get(pin as usize).copied()
    }

    fn pin_count(&self) -> PinId {
        self.len() as PinId
    }
}

/// Pin multiplexing service.
pub trait PinRouter {
    fn set_pin_function(&mut self, pin: PinId, function: PinFunction);
}

/// Plain digital GPIO service used by the threshold fallback.
pub trait DigitalOutput {
    fn set_mode(&mut self, pin: PinId, mode: PinMode);

    fn write_level(&mut self, pin: PinId, level: PinState);
}
