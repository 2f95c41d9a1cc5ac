//! SAMD21 register layout over the `atsamd21g` PAC.
//!
//! One synchronisation flag per peripheral (`STATUS.SYNCBUSY`, or any
//! `SYNCBUSY` bit on the TCC units), so the sync kind the core asks about
//! is ignored.  A single DAC channel with no ready flag.  Six timer units:
//! TCC0..TCC2 then TC3..TC5, the TCs run in 8-bit counter mode.

use atsamd21g as pac;

use crate::analog::{
    AdcPort, AdcSync, DacChannel, DacPort, DacSync, NativeResolution, Reference, TimerClass,
    TimerId, TimerPort, TimerSync,
};

const TIMER_UNITS: u8 = 6;

/// Register blocks the adapter drives.
#[derive(Clone, Copy)]
pub struct Samd21Blocks<'a> {
    pub adc: &'a pac::adc::RegisterBlock,
    pub dac: &'a pac::dac::RegisterBlock,
    pub gclk: &'a pac::gclk::RegisterBlock,
    pub tcc: [&'a pac::tcc0::RegisterBlock; 3],
    pub tc: [&'a pac::tc3::RegisterBlock; 3],
}

/// Peripheral tokens handed over to [`Samd21Port::new`].
pub struct Samd21Peripherals {
    pub adc: pac::Adc,
    pub dac: pac::Dac,
    pub gclk: pac::Gclk,
    pub tcc0: pac::Tcc0,
    pub tcc1: pac::Tcc1,
    pub tcc2: pac::Tcc2,
    pub tc3: pac::Tc3,
    pub tc4: pac::Tc4,
    pub tc5: pac::Tc5,
}

#[derive(Clone, Copy)]
enum Unit<'a> {
    Tcc(&'a pac::tcc0::RegisterBlock),
    Tc(&'a pac::tc3::RegisterBlock),
}

/// SAMD21 analog peripherals.
pub struct Samd21Port<'a> {
    regs: Samd21Blocks<'a>,
}

impl Samd21Port<'static> {
    /// Take ownership of the analog peripherals.
    pub fn new(_peripherals: Samd21Peripherals) -> Self {
        // SAFETY: the tokens are consumed by this call, so no other owner
        // can reach these blocks; PAC blocks live at fixed addresses.
        let regs = unsafe {
            Samd21Blocks {
                adc: &*pac::Adc::ptr(),
                dac: &*pac::Dac::ptr(),
                gclk: &*pac::Gclk::ptr(),
                tcc: [
                    &*pac::Tcc0::ptr(),
                    &*pac::Tcc1::ptr(),
                    &*pac::Tcc2::ptr(),
                ],
                tc: [&*pac::Tc3::ptr(), &*pac::Tc4::ptr(), &*pac::Tc5::ptr()],
            }
        };
        Self::from_blocks(regs)
    }
}

impl<'a> Samd21Port<'a> {
    /// Drive borrowed register blocks.
    pub fn from_blocks(regs: Samd21Blocks<'a>) -> Self {
        Self { regs }
    }

    fn unit(&self, timer: TimerId) -> Option<Unit<'a>> {
        let i = timer.index();
        match timer.0 {
            0..=2 => Some(Unit::Tcc(self.regs.tcc[i])),
            3..=5 => Some(Unit::Tc(self.regs.tc[i - 3])),
            _ => None,
        }
    }
}

impl AdcPort for Samd21Port<'_> {
    fn adc_busy(&self, _sync: AdcSync) -> bool {
        self.regs.adc.status().read().syncbusy().bit_is_set()
    }

    fn adc_select_input(&mut self, channel: u8) {
        self.regs
            .adc
            .inputctrl()
            .modify(|_, w| unsafe { w.muxpos().bits(channel & 0x1F) });
    }

    fn adc_set_enabled(&mut self, enabled: bool) {
        self.regs.adc.ctrla().modify(|_, w| w.enable().bit(enabled));
    }

    fn adc_trigger(&mut self) {
        self.regs.adc.swtrig().write(|w| w.start().set_bit());
    }

    fn adc_clear_result_ready(&mut self) {
        self.regs.adc.intflag().write(|w| w.resrdy().bit(true));
    }

    fn adc_result_ready(&self) -> bool {
        self.regs.adc.intflag().read().resrdy().bit_is_set()
    }

    fn adc_result(&self) -> u16 {
        self.regs.adc.result().read().bits()
    }

    fn adc_set_resolution(&mut self, resolution: NativeResolution) {
        self.regs.adc.ctrlb().modify(|_, w| match resolution {
            NativeResolution::Bits12 => w.ressel()._12bit(),
            NativeResolution::Bits10 => w.ressel()._10bit(),
            NativeResolution::Bits8 => w.ressel()._8bit(),
        });
    }

    fn adc_set_reference(&mut self, reference: Reference) {
        let adc = self.regs.adc;
        adc.inputctrl().modify(|_, w| match reference {
            Reference::Default => w.gain().div2(),
            _ => w.gain()._1x(),
        });
        adc.refctrl().modify(|_, w| match reference {
            Reference::Default | Reference::Internal1V65 => w.refsel().intvcc1(),
            Reference::Internal | Reference::Internal2V23 => w.refsel().intvcc0(),
            Reference::External => w.refsel().arefa(),
            Reference::Internal1V0 => w.refsel().int1v(),
        });
    }
}

impl DacPort for Samd21Port<'_> {
    const DAC_CHANNELS: u8 = 1;

    fn dac_busy(&self, _sync: DacSync) -> bool {
        self.regs.dac.status().read().syncbusy().bit_is_set()
    }

    // No start-up flag on this DAC.
    fn dac_ready(&self, _channel: DacChannel) -> bool {
        true
    }

    fn dac_is_enabled(&self, _channel: DacChannel) -> bool {
        self.regs.dac.ctrla().read().enable().bit_is_set()
    }

    fn dac_set_enabled(&mut self, _channel: DacChannel, enabled: bool) {
        let dac = self.regs.dac;
        if enabled {
            dac.ctrlb().modify(|_, w| w.eoen().set_bit());
        }
        dac.ctrla().modify(|_, w| w.enable().bit(enabled));
    }

    fn dac_write_data(&mut self, _channel: DacChannel, value: u16) {
        self.regs.dac.data().write(|w| unsafe { w.bits(value) });
    }
}

impl TimerPort for Samd21Port<'_> {
    const TIMER_UNITS: u8 = TIMER_UNITS;

    fn timer_class(&self, timer: TimerId) -> TimerClass {
        match self.unit(timer) {
            Some(Unit::Tc(_)) => TimerClass::Counter8,
            _ => TimerClass::Wide,
        }
    }

    fn timer_busy(&self, timer: TimerId, sync: TimerSync) -> bool {
        if sync == TimerSync::Clock {
            return self.regs.gclk.status().read().syncbusy().bit_is_set();
        }
        match self.unit(timer) {
            Some(Unit::Tc(tc)) => tc.count8().status().read().syncbusy().bit_is_set(),
            Some(Unit::Tcc(tcc)) => tcc.syncbusy().read().bits() != 0,
            None => false,
        }
    }

    fn timer_connect_clock(&mut self, timer: TimerId) {
        if timer.0 >= TIMER_UNITS {
            return;
        }
        // Units are paired on clock IDs; GEN left at zero: generator 0.
        self.regs.gclk.clkctrl().write(|w| {
            let w = match timer.0 {
                0 | 1 => w.id().tcc0_tcc1(),
                2 | 3 => w.id().tcc2_tc3(),
                _ => w.id().tc4_tc5(),
            };
            w.clken().set_bit()
        });
    }

    fn timer_set_enabled(&mut self, timer: TimerId, enabled: bool) {
        match self.unit(timer) {
            Some(Unit::Tc(tc)) => {
                tc.count8().ctrla().modify(|_, w| w.enable().bit(enabled));
            }
            Some(Unit::Tcc(tcc)) => {
                tcc.ctrla().modify(|_, w| w.enable().bit(enabled));
            }
            None => {}
        }
    }

    fn timer_configure_pwm(&mut self, timer: TimerId) {
        match self.unit(timer) {
            Some(Unit::Tc(tc)) => {
                tc.count8().ctrla().modify(|_, w| {
                    w.mode().count8().wavegen().npwm().prescaler().div256()
                });
            }
            Some(Unit::Tcc(tcc)) => {
                tcc.ctrla().modify(|_, w| w.prescaler().div256());
                tcc.wave().modify(|_, w| w.wavegen().npwm());
            }
            None => {}
        }
    }

    fn timer_set_compare(&mut self, timer: TimerId, channel: u8, value: u32) {
        let ch = usize::from(channel);
        match self.unit(timer) {
            Some(Unit::Tc(tc)) => {
                tc.count8().cc(ch).write(|w| unsafe { w.bits(value as u8) });
            }
            Some(Unit::Tcc(tcc)) => {
                tcc.cc(ch).write(|w| unsafe { w.bits(value) });
            }
            None => {}
        }
    }

    fn timer_set_period(&mut self, timer: TimerId, period: u32) {
        match self.unit(timer) {
            Some(Unit::Tc(tc)) => {
                tc.count8().per().write(|w| unsafe { w.bits(period as u8) });
            }
            Some(Unit::Tcc(tcc)) => {
                tcc.per().write(|w| unsafe { w.bits(period) });
            }
            None => {}
        }
    }

    fn timer_set_compare_buffered(&mut self, timer: TimerId, channel: u8, value: u32) {
        match self.unit(timer) {
            // 8-bit counters have no buffer stage.
            Some(Unit::Tc(_)) => self.timer_set_compare(timer, channel, value),
            Some(Unit::Tcc(tcc)) => {
                tcc.ccb(usize::from(channel))
                    .write(|w| unsafe { w.bits(value) });
            }
            None => {}
        }
    }

    fn timer_set_update_lock(&mut self, timer: TimerId, locked: bool) {
        let Some(Unit::Tcc(tcc)) = self.unit(timer) else {
            return;
        };
        if locked {
            tcc.ctrlbset().write(|w| w.lupd().bit(true));
        } else {
            tcc.ctrlbclr().write(|w| w.lupd().bit(true));
        };
    }
}
