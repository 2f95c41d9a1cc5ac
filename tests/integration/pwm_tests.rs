//! Timer PWM: one-time unit configuration and per-class duty updates.

use samd_analog::analog::{PinFunction, PwmRoute, TimerId, pwm};

use crate::mock_hw::*;

#[test]
fn first_write_configures_the_unit() {
    let mut io = analog_io();
    io.write(PIN_TCC0_0, 100);

    assert_eq!(
        io.port().writes(),
        vec![
            Op::TimerClock(0),
            Op::TimerEnable(0, false),
            Op::TimerPwmMode(0),
            Op::TimerCompare(0, 0, 100),
            Op::TimerPeriod(0, 255),
            Op::TimerEnable(0, true),
        ]
    );
    assert!(io.port().timer_running(0));
    assert_eq!(io.port().period(0), 255);
    assert!(io.state().is_timer_configured(TimerId(0)));
    assert_eq!(io.gpio().function(PIN_TCC0_0), Some(PinFunction::TimerPrimary));
}

#[test]
fn unit_is_configured_exactly_once() {
    let mut io = analog_io();
    for v in [0, 50, 100, 150, 255] {
        io.write(PIN_TCC0_0, v);
    }
    let port = io.port();
    assert_eq!(port.count(|op| matches!(op, Op::TimerClock(0))), 1);
    assert_eq!(port.count(|op| matches!(op, Op::TimerPwmMode(0))), 1);
    assert_eq!(port.count(|op| matches!(op, Op::TimerPeriod(0, _))), 1);
    assert_eq!(port.duty(0, 0), 255);
}

#[test]
fn wide_unit_updates_through_the_lock() {
    let mut io = analog_io();
    io.write(PIN_TCC0_0, 10);
    io.port_mut().clear_ops();

    io.write(PIN_TCC0_0, 77);
    assert_eq!(
        io.port().writes(),
        vec![
            Op::TimerLock(0, true),
            Op::TimerCompareBuffered(0, 0, 77),
            Op::TimerLock(0, false),
        ]
    );
    assert_eq!(io.port().duty(0, 0), 77);
}

#[test]
fn sibling_channel_reuses_configured_unit() {
    let mut io = analog_io();
    io.write(PIN_TCC0_0, 40);
    io.port_mut().clear_ops();

    io.write(PIN_TCC0_1, 90);
    assert_eq!(io.port().count(|op| matches!(op, Op::TimerPwmMode(_))), 0);
    assert_eq!(io.port().duty(0, 0), 40);
    assert_eq!(io.port().duty(0, 1), 90);
    assert_eq!(io.gpio().function(PIN_TCC0_1), Some(PinFunction::TimerAlternate));
}

#[test]
fn counter8_unit_writes_compare_directly() {
    let mut io = analog_io();
    io.write(PIN_TC3_1, 1);
    io.port_mut().clear_ops();

    io.write(PIN_TC3_1, 200);
    assert_eq!(io.port().writes(), vec![Op::TimerCompare(3, 1, 200)]);
    assert_eq!(io.port().duty(3, 1), 200);
}

#[test]
fn units_are_tracked_independently() {
    let mut io = analog_io();
    io.write(PIN_TCC0_0, 1);
    io.write(PIN_TC3_1, 1);

    assert!(io.state().is_timer_configured(TimerId(0)));
    assert!(io.state().is_timer_configured(TimerId(3)));
    assert!(!io.state().is_timer_configured(TimerId(1)));
    assert_eq!(io.port().count(|op| matches!(op, Op::TimerPwmMode(_))), 2);
}

#[test]
fn duty_is_rescaled_to_eight_bits() {
    let mut io = analog_io();
    io.set_write_resolution(10);
    io.write(PIN_TC3_1, 1023);
    assert_eq!(io.port().duty(3, 1), 255);

    io.set_write_resolution(4);
    io.write(PIN_TC3_1, 15);
    assert_eq!(io.port().duty(3, 1), 240);
}

#[test]
fn pin_is_routed_on_every_write() {
    let mut io = analog_io();
    io.write(PIN_TC3_1, 10);
    io.write(PIN_TC3_1, 20);
    let routed = io
        .gpio()
        .calls
        .iter()
        .filter(|c| **c == GpioCall::Function(PIN_TC3_1, PinFunction::TimerPrimary))
        .count();
    assert_eq!(routed, 2);
}

#[test]
fn route_to_missing_unit_is_ignored() {
    let mut io = analog_io();
    let mut state = io.state().clone();
    let route = PwmRoute {
        timer: TimerId(SIM_TIMERS as u8),
        channel: 0,
        function: PinFunction::TimerPrimary,
    };

    pwm::write(io.port_mut(), &mut state, &route, 128);

    assert!(io.port().ops().is_empty());
    assert!(!state.is_timer_configured(route.timer));
}
