//! Adapters: concrete implementations of the hardware port traits.
//!
//! | Adapter   | Implements          | Connects to (PAC)                            |
//! |-----------|---------------------|----------------------------------------------|
//! | `samd21`  | AnalogHardwarePort  | `atsamd21g`: ADC, DAC, TCC0-2, TC3-5, GCLK   |
//! | `samd51`  | AnalogHardwarePort  | `atsamd51p`: ADC0, DAC0/1, TCC0-2, TC3, GCLK |
//!
//! Both layouts are always compiled; the `samd21` / `samd51` features only
//! choose which one [`ChipPort`] names.

pub mod samd21;
pub mod samd51;

pub use samd21::{Samd21Blocks, Samd21Peripherals, Samd21Port};
pub use samd51::{Samd51Blocks, Samd51Peripherals, Samd51Port};

/// Register layout of the target chip.
#[cfg(feature = "samd21")]
pub type ChipPort = Samd21Port<'static>;

#[cfg(all(feature = "samd51", not(feature = "samd21")))]
pub type ChipPort = Samd51Port<'static>;

/// An all-zero register block in host memory, standing in for the
/// peripheral in adapter tests.
#[cfg(test)]
pub(crate) fn blank_block<T>() -> &'static T {
    // SAFETY: PAC register blocks are plain integer cells, for which the
    // all-zero pattern is a valid value.
    Box::leak(unsafe { Box::<T>::new_zeroed().assume_init() })
}
