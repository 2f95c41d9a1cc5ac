//! DAC channel enable/load ordering and the non-DAC no-op.

use samd_analog::analog::{AnalogState, DacChannel, PinCapability, dac};

use crate::mock_hw::*;

#[test]
fn first_write_enables_then_loads() {
    let mut io = analog_io();
    io.write(PIN_DAC0, 128);

    assert_eq!(
        io.port().writes(),
        vec![Op::DacEnable(0, true), Op::DacData(0, 512)]
    );
    assert_eq!(io.port().dac_output(0), Some(512));
}

#[test]
fn data_first_layout_loads_then_enables() {
    let mut io = analog_io_data_first();
    io.write(PIN_DAC0, 128);

    assert_eq!(
        io.port().writes(),
        vec![Op::DacData(0, 512), Op::DacEnable(0, true)]
    );
    assert_eq!(io.port().dac_output(0), Some(512));
}

#[test]
fn enabled_channel_only_reloads_data() {
    let mut io = analog_io();
    io.write(PIN_DAC1, 1);
    io.port_mut().clear_ops();

    io.write(PIN_DAC1, 255);
    assert_eq!(io.port().writes(), vec![Op::DacData(1, 1020)]);
}

#[test]
fn dac_data_is_masked_to_ten_bits() {
    let mut io = analog_io();
    io.set_write_resolution(12);
    io.write(PIN_DAC0, 0xFFF);
    assert_eq!(io.port().dac_output(0), Some(0x3FF));

    // Values wider than the write width are masked, never passed on.
    io.write(PIN_DAC0, 0x1FFF);
    assert_eq!(io.port().dac_output(0), Some(0x3FF));

    io.set_write_resolution(10);
    io.write(PIN_DAC0, 0x2AA);
    assert_eq!(io.port().dac_output(0), Some(0x2AA));
}

#[test]
fn channels_are_independent() {
    let mut io = analog_io();
    io.write(PIN_DAC0, 64);
    io.write(PIN_DAC1, 192);
    assert_eq!(io.port().dac_output(0), Some(256));
    assert_eq!(io.port().dac_output(1), Some(768));
}

#[test]
fn dac_write_is_reenabled_after_a_read() {
    let mut io = analog_io();
    io.write(PIN_DAC0, 100);
    io.read(PIN_DAC0);
    io.port_mut().clear_ops();

    io.write(PIN_DAC0, 100);
    assert_eq!(
        io.port().writes(),
        vec![Op::DacEnable(0, true), Op::DacData(0, 400)]
    );
}

#[test]
fn write_without_dac_channel_has_no_side_effects() {
    let mut port = SimPort::new();
    let state = AnalogState::new();

    dac::write(&mut port, &state, &PinCapability::NONE, 500);
    assert!(port.ops().is_empty());

    let missing = PinCapability {
        dac: Some(DacChannel(7)),
        ..PinCapability::NONE
    };
    dac::write(&mut port, &state, &missing, 500);
    assert!(port.ops().is_empty());
}

#[test]
fn dac_write_does_not_touch_gpio() {
    let mut io = analog_io();
    io.write(PIN_DAC0, 200);
    assert!(io.gpio().calls.is_empty());
}
