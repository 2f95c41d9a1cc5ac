//! Analog I/O service: the caller-facing surface of the core.
//!
//! [`AnalogIo`] owns the hardware port, the pin directory, the GPIO
//! collaborators and the [`AnalogState`] context.  Every request resolves
//! the pin's capability, then runs the matching controller with the state
//! passed in explicitly.
//!
//! ```text
//!   read  ─▶ PinDirectory ─▶ (DAC release) ─▶ adc ─▶ rescale
//!   write ─▶ PinDirectory ─▶ dispatch ─▶ dac | pwm | digital
//! ```
//!
//! Calls are fully synchronous.  Nothing here locks: racing calls on the
//! same peripheral (e.g. from an interrupt handler) must be prevented by
//! the caller.

use core::convert::Infallible;

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use log::{info, warn};

use crate::config::AnalogConfig;
use crate::error::{ConfigError, PinError, Result};

use super::capability::{PinCapability, PinId};
use super::ports::{
    AnalogHardwarePort, DigitalOutput, PinDirectory, PinFunction, PinRouter, Reference,
};
use super::resolution::rescale;
use super::state::{AnalogState, MAX_TIMER_UNITS};
use super::{adc, dac, dispatch};

/// The analog subsystem.
pub struct AnalogIo<P, D, G> {
    port: P,
    pins: D,
    gpio: G,
    state: AnalogState,
}

impl<P, D, G> AnalogIo<P, D, G>
where
    P: AnalogHardwarePort,
    D: PinDirectory,
    G: PinRouter + DigitalOutput,
{
    /// Validate the directory against the port, then apply `config`.
    pub fn new(port: P, pins: D, gpio: G, config: &AnalogConfig) -> Result<Self> {
        config.validate()?;
        if usize::from(P::TIMER_UNITS) > MAX_TIMER_UNITS {
            return Err(ConfigError::TooManyTimers(P::TIMER_UNITS).into());
        }
        validate_directory::<P>(&pins)?;

        let mut io = Self {
            port,
            pins,
            gpio,
            state: AnalogState::new(),
        };
        io.set_read_resolution(config.read_resolution_bits);
        io.set_write_resolution(config.write_resolution_bits);
        io.set_reference(config.reference);

        info!(
            "analog: {} pins, {} DAC ch, {} timers, read {} bits, write {} bits, ref {:?}",
            io.pins.pin_count(),
            P::DAC_CHANNELS,
            P::TIMER_UNITS,
            config.read_resolution_bits,
            config.write_resolution_bits,
            config.reference
        );
        Ok(io)
    }

    // ── Configuration ─────────────────────────────────────────

    /// Set the caller-facing read width; the ADC is reprogrammed to the
    /// nearest native width (8, 10 or 12 bits).
    pub fn set_read_resolution(&mut self, bits: u8) {
        adc::set_read_resolution(&mut self.port, &mut self.state, bits);
    }

    /// Set the caller-facing write width used to rescale DAC/PWM values.
    pub fn set_write_resolution(&mut self, bits: u8) {
        self.state.write_resolution_bits = bits;
    }

    pub fn set_reference(&mut self, reference: Reference) {
        adc::set_reference(&mut self.port, reference);
    }

    // ── I/O ───────────────────────────────────────────────────

    /// Sample `pin` and return the value at the caller's read width.
    ///
    /// Pins with no analog input read as 0 without touching the ADC.
    pub fn read(&mut self, pin: PinId) -> u32 {
        let pin = self.pins.analog_pin(pin);
        let cap = self.capability(pin);
        let Some(channel) = cap.analog_input else {
            warn!("analog read on pin {} with no ADC input", pin);
            return 0;
        };

        self.gpio.set_pin_function(pin, PinFunction::Analog);
        if let Some(dac) = cap.dac {
            dac::release(&mut self.port, dac);
        }
        adc::read(&mut self.port, &self.state, channel)
    }

    /// Drive `pin` with `value` given at the caller's write width.
    pub fn write(&mut self, pin: PinId, value: u32) {
        let cap = self.capability(pin);
        dispatch::write(
            &mut self.port,
            &mut self.gpio,
            &mut self.state,
            pin,
            &cap,
            value,
        );
    }

    /// Borrow `pin` as an `embedded-hal` PWM output.
    pub fn output(&mut self, pin: PinId) -> AnalogOutput<'_, P, D, G> {
        AnalogOutput { io: self, pin }
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn capability(&self, pin: PinId) -> PinCapability {
        match self.pins.lookup(pin) {
            Some(desc) => PinCapability::from_descriptor(&desc),
            None => {
                warn!("pin {} not in directory", pin);
                PinCapability::NONE
            }
        }
    }

    pub fn state(&self) -> &AnalogState {
        &self.state
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    pub fn gpio_mut(&mut self) -> &mut G {
        &mut self.gpio
    }

    /// Tear down the service and hand back its collaborators.
    pub fn release(self) -> (P, D, G) {
        (self.port, self.pins, self.gpio)
    }
}

fn validate_directory<P: AnalogHardwarePort>(
    pins: &impl PinDirectory,
) -> core::result::Result<(), PinError> {
    for pin in 0..pins.pin_count() {
        let Some(desc) = pins.lookup(pin) else {
            continue;
        };
        if desc.dac_channel.is_some() && desc.pwm.is_some() {
            return Err(PinError::ConflictingOutputs { pin });
        }
        if let Some(ch) = desc.dac_channel {
            if ch.0 >= P::DAC_CHANNELS {
                return Err(PinError::DacOutOfRange { pin, channel: ch.0 });
            }
        }
        if let Some(pwm) = desc.pwm {
            if pwm.timer.0 >= P::TIMER_UNITS {
                return Err(PinError::TimerOutOfRange {
                    pin,
                    timer: pwm.timer.0,
                });
            }
        }
    }
    Ok(())
}

// ───────────────────────────────────────────────────────────────
// embedded-hal PWM handle
// ───────────────────────────────────────────────────────────────

/// A pin of an [`AnalogIo`] viewed as an `embedded-hal` duty-cycle output.
///
/// Full scale is the caller-facing write width, capped at 16 bits; wider
/// write widths are reached by shifting the 16-bit duty up.
pub struct AnalogOutput<'a, P, D, G> {
    io: &'a mut AnalogIo<P, D, G>,
    pin: PinId,
}

impl<P, D, G> AnalogOutput<'_, P, D, G> {
    fn duty_bits(&self) -> u8 {
        self.io.state.write_resolution_bits.clamp(1, 16)
    }
}

impl<P, D, G> ErrorType for AnalogOutput<'_, P, D, G> {
    type Error = Infallible;
}

impl<P, D, G> SetDutyCycle for AnalogOutput<'_, P, D, G>
where
    P: AnalogHardwarePort,
    D: PinDirectory,
    G: PinRouter + DigitalOutput,
{
    fn max_duty_cycle(&self) -> u16 {
        ((1u32 << self.duty_bits()) - 1) as u16
    }

    fn set_duty_cycle(&mut self, duty: u16) -> core::result::Result<(), Self::Error> {
        let value = rescale(
            u32::from(duty),
            self.duty_bits(),
            self.io.state.write_resolution_bits,
        );
        self.io.write(self.pin, value);
        Ok(())
    }
}
