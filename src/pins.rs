//! Pin map for the Grove UI Wireless board (SAMD51).
//!
//! Single source of truth for which board pin reaches which ADC input,
//! DAC channel or timer compare channel.  [`BoardPins`] serves the table
//! to the analog core as a [`PinDirectory`].

use crate::analog::{PinDescriptor, PinDirectory, PinId};

// ---------------------------------------------------------------------------
// Analog header (RPi-compatible A0..A8)
// ---------------------------------------------------------------------------

pub const A0: PinId = 0;
pub const A1: PinId = A0 + 1;
pub const A2: PinId = A0 + 2;
pub const A3: PinId = A0 + 3;
pub const A4: PinId = A0 + 4;
pub const A5: PinId = A0 + 5;
pub const A6: PinId = A0 + 6;
pub const A7: PinId = A0 + 7;
pub const A8: PinId = A0 + 8;

/// Highest bare channel number a caller may pass to `read` instead of `An`.
pub const ANALOG_ALIAS_MAX: PinId = 7;

// ---------------------------------------------------------------------------
// DAC outputs
// ---------------------------------------------------------------------------

/// PA02, DAC channel 0.
pub const DAC0: PinId = 9;
/// PA05, DAC channel 1.
pub const DAC1: PinId = 10;

// ---------------------------------------------------------------------------
// Digital header
// ---------------------------------------------------------------------------

pub const D0: PinId = 11;
pub const LED_BUILTIN: PinId = 13;

pub const PINS_COUNT: usize = 23;

// ---------------------------------------------------------------------------
// Descriptor table
// ---------------------------------------------------------------------------

const PD: PinDescriptor = PinDescriptor::digital();

/// Indexed by board pin number.
pub static PIN_TABLE: [PinDescriptor; PINS_COUNT] = [
    // A0..A8
    PinDescriptor::analog(6),
    PinDescriptor::analog(7),
    PinDescriptor::analog(8),
    PinDescriptor::analog(9),
    PinDescriptor::analog(4),
    PinDescriptor::analog(10),
    PinDescriptor::analog(11),
    PinDescriptor::analog(14),
    PinDescriptor::analog(15),
    // DAC0, DAC1
    PinDescriptor::analog(0).with_dac(0),
    PinDescriptor::analog(5).with_dac(1),
    // D0..D1: TCC0 WO[0], WO[1]
    PinDescriptor::digital().with_timer(0, 0),
    PinDescriptor::digital().with_timer(0, 1),
    // LED
    PD,
    // D3..D4: TCC1 WO[2], WO[3] via the alternate function
    PinDescriptor::digital().with_timer_alt(1, 2),
    PinDescriptor::digital().with_timer_alt(1, 3),
    // D5: TCC2 WO[1]
    PinDescriptor::digital().with_timer(2, 1),
    // D6..D7: TC3 WO[0], WO[1]
    PinDescriptor::digital().with_timer(3, 0),
    PinDescriptor::digital().with_timer(3, 1),
    // D8..D11
    PD,
    PD,
    PD,
    PD,
];

/// The board's [`PinDirectory`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardPins;

impl PinDirectory for BoardPins {
    fn lookup(&self, pin: PinId) -> Option<PinDescriptor> {
        PIN_TABLE.get(pin as usize).copied()
    }

    fn pin_count(&self) -> PinId {
        PINS_COUNT as PinId
    }

    /// Bare channel numbers `0..=7` name `A0..A7`.
    fn analog_pin(&self, pin: PinId) -> PinId {
        if pin <= ANALOG_ALIAS_MAX { A0 + pin } else { pin }
    }
}
