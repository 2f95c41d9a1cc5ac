//! Analog read/write core for SAMD21 and SAMD51.
//!
//! One pin-level API over three peripherals: ADC sampling, DAC output and
//! timer PWM, with a digital threshold fallback for pins with none of
//! them.  The core in [`analog`] talks to the chip only through port
//! traits; [`adapters`] holds the register-level implementations.
//!
//! ```ignore
//! let dp = atsamd51p::Peripherals::take().unwrap();
//! let port = Samd51Port::new(Samd51Peripherals {
//!     adc0: dp.adc0,
//!     dac: dp.dac,
//!     gclk: dp.gclk,
//!     tcc0: dp.tcc0,
//!     tcc1: dp.tcc1,
//!     tcc2: dp.tcc2,
//!     tc3: dp.tc3,
//! });
//! let mut io = AnalogIo::new(port, BoardPins, gpio, &AnalogConfig::default())?;
//! io.set_read_resolution(12);
//! let sample = io.read(pins::A1);
//! io.write(pins::DAC0, 512);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unused_must_use)]

pub mod adapters;
pub mod analog;
pub mod config;
pub mod error;
pub mod pins;

pub use analog::{AnalogIo, AnalogOutput, PinId, Reference};
pub use config::AnalogConfig;
pub use error::{Error, Result};
