//! Write routing and the digital threshold fallback.

use embedded_hal::digital::PinState;
use samd_analog::analog::PinMode;

use crate::mock_hw::*;

#[test]
fn high_and_low_around_the_threshold() {
    let mut io = analog_io();

    io.write(PIN_DIGITAL, 200);
    assert_eq!(io.gpio().level(PIN_DIGITAL), Some(PinState::High));

    io.write(PIN_DIGITAL, 50);
    assert_eq!(io.gpio().level(PIN_DIGITAL), Some(PinState::Low));

    io.write(PIN_DIGITAL, 127);
    assert_eq!(io.gpio().level(PIN_DIGITAL), Some(PinState::Low));

    io.write(PIN_DIGITAL, 128);
    assert_eq!(io.gpio().level(PIN_DIGITAL), Some(PinState::High));
}

#[test]
fn digital_fallback_sets_output_mode_first() {
    let mut io = analog_io();
    io.write(PIN_DIGITAL, 255);
    assert_eq!(
        io.gpio().calls,
        vec![
            GpioCall::Mode(PIN_DIGITAL, PinMode::Output),
            GpioCall::Level(PIN_DIGITAL, PinState::High),
        ]
    );
    assert!(io.port().ops().is_empty());
}

#[test]
fn threshold_applies_after_rescaling() {
    let mut io = analog_io();
    io.set_write_resolution(12);

    io.write(PIN_DIGITAL, 2048);
    assert_eq!(io.gpio().level(PIN_DIGITAL), Some(PinState::High));

    io.write(PIN_DIGITAL, 2047);
    assert_eq!(io.gpio().level(PIN_DIGITAL), Some(PinState::Low));
}

#[test]
fn unknown_pin_takes_the_digital_path() {
    let mut io = analog_io();
    io.write(99, 255);
    assert_eq!(io.gpio().level(99), Some(PinState::High));
    assert!(io.port().ops().is_empty());
}

#[test]
fn analog_input_without_dac_falls_back_to_digital() {
    let mut io = analog_io();
    io.write(PIN_ANALOG, 10);
    assert_eq!(io.gpio().level(PIN_ANALOG), Some(PinState::Low));
    assert!(io.port().ops().is_empty());
}

#[test]
fn dac_pin_never_reaches_gpio_or_timers() {
    let mut io = analog_io();
    io.write(PIN_DAC1, 255);
    assert!(io.gpio().calls.is_empty());
    assert_eq!(io.port().count(|op| matches!(op, Op::TimerClock(_))), 0);
}
