//! Analog write dispatch: DAC, then PWM, then a digital approximation.

use embedded_hal::digital::PinState;
use log::trace;

use super::capability::{PinCapability, PinId};
use super::ports::{AnalogHardwarePort, DigitalOutput, PinMode, PinRouter};
use super::resolution::rescale;
use super::state::AnalogState;
use super::{dac, pwm};

/// Rescaled 8-bit values at or above this drive the pin HIGH.
pub const DIGITAL_THRESHOLD: u32 = 128;

/// Route one write to whatever hardware serves `pin`.
pub fn write<P, G>(
    port: &mut P,
    gpio: &mut G,
    state: &mut AnalogState,
    pin: PinId,
    cap: &PinCapability,
    value: u32,
) where
    P: AnalogHardwarePort,
    G: PinRouter + DigitalOutput,
{
    if cap.is_dac_output() {
        dac::write(port, state, cap, value);
        return;
    }

    if let Some(route) = cap.pwm {
        gpio.set_pin_function(pin, route.function);
        pwm::write(port, state, &route, value);
        return;
    }

    write_digital(gpio, state, pin, value);
}

/// Threshold fallback for pins with no analog output hardware.
pub fn write_digital(gpio: &mut impl DigitalOutput, state: &AnalogState, pin: PinId, value: u32) {
    let level8 = rescale(value, state.write_resolution_bits, pwm::PWM_RESOLUTION_BITS);
    gpio.set_mode(pin, PinMode::Output);

    let level = if level8 < DIGITAL_THRESHOLD {
        PinState::Low
    } else {
        PinState::High
    };
    gpio.write_level(pin, level);
    trace!("analog write pin {}: digital {:?}", pin, level);
}
