//! Pin descriptors and the capability derived from them per call.

use bitflags::bitflags;

use super::ports::PinFunction;

/// Logical (board) pin number.
pub type PinId = u32;

/// Index of a timer/counter unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u8);

impl TimerId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a DAC output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DacChannel(pub u8);

impl DacChannel {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

bitflags! {
    /// Descriptor attribute bits, laid out as in the board variant tables.
    pub struct PinAttributes: u32 {
        const COMBO     = 1 << 0;
        const ANALOG    = 1 << 1;
        const DIGITAL   = 1 << 2;
        const PWM       = 1 << 3;
        const TIMER     = 1 << 4;
        const TIMER_ALT = 1 << 5;
        const EXTINT    = 1 << 6;
    }
}

/// Timer unit and compare channel wired to a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmChannel {
    pub timer: TimerId,
    pub channel: u8,
}

/// One entry of the pin descriptor directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinDescriptor {
    pub attributes: PinAttributes,
    pub adc_channel: Option<u8>,
    pub dac_channel: Option<DacChannel>,
    pub pwm: Option<PwmChannel>,
}

impl PinDescriptor {
    /// Plain digital pin with no analog hardware.
    pub const fn digital() -> Self {
        Self {
            attributes: PinAttributes::DIGITAL,
            adc_channel: None,
            dac_channel: None,
            pwm: None,
        }
    }

    pub const fn analog(adc_channel: u8) -> Self {
        Self {
            attributes: PinAttributes::from_bits_truncate(
                PinAttributes::ANALOG.bits() | PinAttributes::DIGITAL.bits(),
            ),
            adc_channel: Some(adc_channel),
            dac_channel: None,
            pwm: None,
        }
    }

    pub const fn with_dac(mut self, channel: u8) -> Self {
        self.dac_channel = Some(DacChannel(channel));
        self
    }

    /// Wire a timer channel reached through the primary timer function.
    pub const fn with_timer(self, timer: u8, channel: u8) -> Self {
        self.with_pwm(PinAttributes::TIMER, timer, channel)
    }

    /// Wire a timer channel reached through the alternate timer function.
    pub const fn with_timer_alt(self, timer: u8, channel: u8) -> Self {
        self.with_pwm(PinAttributes::TIMER_ALT, timer, channel)
    }

    const fn with_pwm(mut self, route: PinAttributes, timer: u8, channel: u8) -> Self {
        self.attributes = PinAttributes::from_bits_truncate(
            self.attributes.bits() | PinAttributes::PWM.bits() | route.bits(),
        );
        self.pwm = Some(PwmChannel {
            timer: TimerId(timer),
            channel,
        });
        self
    }
}

/// PWM output route resolved for a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmRoute {
    pub timer: TimerId,
    pub channel: u8,
    pub function: PinFunction,
}

/// What analog hardware serves a pin.  Computed per call, never stored.
///
/// A pin is at most one of DAC output and PWM output; DAC wins when a
/// descriptor claims both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PinCapability {
    pub analog_input: Option<u8>,
    pub dac: Option<DacChannel>,
    pub pwm: Option<PwmRoute>,
}

impl PinCapability {
    /// Capability of a pin missing from the directory: none.
    pub const NONE: Self = Self {
        analog_input: None,
        dac: None,
        pwm: None,
    };

    pub fn from_descriptor(desc: &PinDescriptor) -> Self {
        let analog_input = desc
            .adc_channel
            .filter(|_| desc.attributes.contains(PinAttributes::ANALOG));

        let dac = desc.dac_channel;

        let pwm = match desc.pwm {
            Some(pwm) if dac.is_none() && desc.attributes.contains(PinAttributes::PWM) => {
                let function = if desc.attributes.contains(PinAttributes::TIMER) {
                    PinFunction::TimerPrimary
                } else {
                    PinFunction::TimerAlternate
                };
                Some(PwmRoute {
                    timer: pwm.timer,
                    channel: pwm.channel,
                    function,
                })
            }
            _ => None,
        };

        Self {
            analog_input,
            dac,
            pwm,
        }
    }

    pub fn is_analog_input(&self) -> bool {
        self.analog_input.is_some()
    }

    pub fn is_dac_output(&self) -> bool {
        self.dac.is_some()
    }

    pub fn is_pwm_output(&self) -> bool {
        self.pwm.is_some()
    }

    pub fn timer_unit(&self) -> Option<TimerId> {
        self.pwm.map(|p| p.timer)
    }

    pub fn timer_channel(&self) -> Option<u8> {
        self.pwm.map(|p| p.channel)
    }
}
