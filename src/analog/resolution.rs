//! Bit-width conversion between caller-facing and native resolutions.
//!
//! Narrowing truncates the low-order bits, widening zero-pads them.
//! No range validation happens here: out-of-range widths are clamped by
//! the ADC controller (read side) or passed straight through as a shift
//! (write side).

/// Native ADC result widths supported by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NativeResolution {
    Bits8,
    #[default]
    Bits10,
    Bits12,
}

impl NativeResolution {
    /// Nearest supported width for a caller-facing read width.
    ///
    /// `> 10` → 12 bits, `9..=10` → 10 bits, anything else → 8 bits.
    pub const fn nearest(bits: u8) -> Self {
        if bits > 10 {
            Self::Bits12
        } else if bits > 8 {
            Self::Bits10
        } else {
            Self::Bits8
        }
    }

    pub const fn bits(self) -> u8 {
        match self {
            Self::Bits8 => 8,
            Self::Bits10 => 10,
            Self::Bits12 => 12,
        }
    }
}

/// Rescale `value` from a `from`-bit range to a `to`-bit range.
///
/// Shifts of 32 bits or more move every bit out and yield 0.
pub fn rescale(value: u32, from: u8, to: u8) -> u32 {
    if from == to {
        value
    } else if from > to {
        value.checked_shr(u32::from(from - to)).unwrap_or(0)
    } else {
        value.checked_shl(u32::from(to - from)).unwrap_or(0)
    }
}
