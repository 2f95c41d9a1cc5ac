//! DAC controller.
//!
//! `Disabled ─▶ Armed ─▶ Enabled`.  A channel stays enabled between
//! writes; later writes only reload the data register.  The ADC hands a
//! shared pin back through [`release`] before converting on it.

use log::{debug, trace};

use super::capability::{DacChannel, PinCapability};
use super::ports::{DacPort, DacSync};
use super::resolution::rescale;
use super::state::AnalogState;
use super::sync::{await_clear, await_set};

/// Native DAC data width.
pub const DAC_RESOLUTION_BITS: u8 = 10;
const DAC_DATA_MASK: u32 = (1 << DAC_RESOLUTION_BITS) - 1;

/// Drive `value` (at the caller's write width) onto the pin's DAC channel.
///
/// Pins without a DAC channel are ignored: callers query capability
/// generically, so this is not an error.
pub fn write<P: DacPort>(port: &mut P, state: &AnalogState, cap: &PinCapability, value: u32) {
    let Some(channel) = cap.dac.filter(|ch| ch.0 < P::DAC_CHANNELS) else {
        return;
    };

    let data = (rescale(value, state.write_resolution_bits, DAC_RESOLUTION_BITS)
        & DAC_DATA_MASK) as u16;

    if P::DAC_ENABLE_BEFORE_DATA {
        enable(port, channel);
        load(port, channel, data);
    } else {
        load(port, channel, data);
        enable(port, channel);
    }
    trace!("dac{}: data {:#05x}", channel.0, data);
}

/// Disable `channel` if it is currently driving its pin.
pub fn release(port: &mut impl DacPort, channel: DacChannel) {
    if !port.dac_is_enabled(channel) {
        return;
    }
    await_clear(|| port.dac_busy(DacSync::Enable));
    port.dac_set_enabled(channel, false);
    await_clear(|| port.dac_busy(DacSync::Enable));
    debug!("dac{}: released for ADC", channel.0);
}

fn load(port: &mut impl DacPort, channel: DacChannel, data: u16) {
    await_clear(|| port.dac_busy(DacSync::Data(channel)));
    port.dac_write_data(channel, data);
    await_clear(|| port.dac_busy(DacSync::Data(channel)));
}

fn enable(port: &mut impl DacPort, channel: DacChannel) {
    if port.dac_is_enabled(channel) {
        return;
    }
    await_clear(|| port.dac_busy(DacSync::Enable));
    port.dac_set_enabled(channel, true);
    await_clear(|| port.dac_busy(DacSync::Enable));
    await_set(|| port.dac_ready(channel));
    debug!("dac{}: enabled", channel.0);
}
