//! Analog core: ADC sampling, DAC output and timer PWM behind port traits.
//!
//! | Module       | Role                                              |
//! |--------------|---------------------------------------------------|
//! | `ports`      | Hardware and collaborator traits                  |
//! | `capability` | Pin descriptors, per-call capability              |
//! | `resolution` | Bit-width conversion, native ADC widths           |
//! | `sync`       | Register synchronisation barriers                 |
//! | `state`      | Resolutions and timer-configured flags            |
//! | `adc`        | Single-shot conversion sequence                   |
//! | `dac`        | DAC channel enable / data load / release          |
//! | `pwm`        | Timer first-use configuration and duty updates    |
//! | `dispatch`   | DAC → PWM → digital write routing                 |
//! | `service`    | [`AnalogIo`] facade                               |
//!
//! No module here touches a register directly; see [`crate::adapters`].

pub mod adc;
pub mod capability;
pub mod dac;
pub mod dispatch;
pub mod ports;
pub mod pwm;
pub mod resolution;
pub mod service;
pub mod state;
pub mod sync;

pub use capability::{
    DacChannel, PinAttributes, PinCapability, PinDescriptor, PinId, PwmChannel, PwmRoute, TimerId,
};
pub use ports::{
    AdcPort, AdcSync, AnalogHardwarePort, DacPort, DacSync, DigitalOutput, PinDirectory,
    PinFunction, PinMode, PinRouter, Reference, TimerClass, TimerPort, TimerSync,
};
pub use resolution::{NativeResolution, rescale};
pub use service::{AnalogIo, AnalogOutput};
pub use state::AnalogState;
