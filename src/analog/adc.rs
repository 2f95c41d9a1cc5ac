//! ADC controller: single-shot conversions on the shared converter.
//!
//! ```text
//!  Idle ─▶ InputSelected ─▶ Enabled ─▶ FirstConversionDiscarded
//!                                              │
//!  Idle ◀─ Disabled ◀─ ResultReady ◀─ Converting
//! ```
//!
//! The converter is enabled only for the duration of one read so a DAC
//! sharing the pin can take it back afterwards.  The first conversion
//! after an input or reference change is unusable and is always
//! discarded by triggering twice.

use log::trace;

use super::ports::{AdcPort, AdcSync, Reference};
use super::resolution::{NativeResolution, rescale};
use super::state::AnalogState;
use super::sync::{await_clear, await_set};

/// Store the caller-facing read width and program the nearest native one.
pub fn set_read_resolution(port: &mut impl AdcPort, state: &mut AnalogState, bits: u8) {
    let native = NativeResolution::nearest(bits);
    state.read_resolution_bits = bits;

    await_clear(|| port.adc_busy(AdcSync::Resolution));
    port.adc_set_resolution(native);
    await_clear(|| port.adc_busy(AdcSync::Resolution));
    state.native_resolution = native;

    trace!("adc: read {} bits, native {} bits", bits, native.bits());
}

/// Select the reference voltage (and matching gain).
pub fn set_reference(port: &mut impl AdcPort, reference: Reference) {
    // Never reprogram the reference mid-conversion.
    await_clear(|| port.adc_busy(AdcSync::Reference));
    port.adc_set_reference(reference);
    trace!("adc: reference {:?}", reference);
}

/// Run one full conversion on `channel` and return the raw result.
pub fn convert(port: &mut impl AdcPort, channel: u8) -> u16 {
    // Idle → InputSelected
    await_clear(|| port.adc_busy(AdcSync::InputControl));
    port.adc_select_input(channel);
    await_clear(|| port.adc_busy(AdcSync::InputControl));

    // InputSelected → Enabled
    port.adc_set_enabled(true);
    await_clear(|| port.adc_busy(AdcSync::Enable));

    // Enabled → FirstConversionDiscarded
    port.adc_trigger();
    await_clear(|| port.adc_busy(AdcSync::Trigger));
    port.adc_trigger();

    // → Converting: the flag may still be set by the discarded result.
    port.adc_clear_result_ready();
    await_set(|| port.adc_result_ready());

    // → ResultReady
    let raw = port.adc_result();

    // → Disabled → Idle
    await_clear(|| port.adc_busy(AdcSync::Enable));
    port.adc_set_enabled(false);
    await_clear(|| port.adc_busy(AdcSync::Enable));

    trace!("adc: channel {} raw {:#x}", channel, raw);
    raw
}

/// Convert `channel` and rescale the sample to the caller's read width.
pub fn read(port: &mut impl AdcPort, state: &AnalogState, channel: u8) -> u32 {
    let raw = convert(port, channel);
    rescale(
        u32::from(raw),
        state.native_resolution.bits(),
        state.read_resolution_bits,
    )
}
