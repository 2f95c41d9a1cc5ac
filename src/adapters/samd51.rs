//! SAMD51 register layout over the `atsamd51p` PAC.
//!
//! Per-register `SYNCBUSY` bits, so each [`AdcSync`]/[`DacSync`]/
//! [`TimerSync`] maps onto its own flag.  Two DAC channels behind a
//! shared controller enable, each with its own `DACCTRLn.ENABLE` and
//! `STATUS.READYn`.  Four timer units: TCC0..TCC2 and TC3.
//!
//! Peripheral clocks go through the per-peripheral `PCHCTRL` registers,
//! which have no sync flag: the clock is connected once `CHEN` reads back.
//! The bus clocks (`MCLK.APBxMASK`) are left to the startup code.

use atsamd51p as pac;

use crate::analog::sync::await_clear;
use crate::analog::{
    AdcPort, AdcSync, DacChannel, DacPort, DacSync, NativeResolution, Reference, TimerClass,
    TimerId, TimerPort, TimerSync,
};

const DAC_CHANNELS: u8 = 2;
const TIMER_UNITS: u8 = 4;

/// `PCHCTRL` index per timer unit: TCC0/TCC1 share one, TC3 is paired
/// with TC2, TCC2 with TCC3.
const CLOCK_CHANNELS: [usize; TIMER_UNITS as usize] = [25, 25, 29, 26];

/// `SYNCBUSY.CCn` bits of a TCC unit.
const TCC_SYNCBUSY_CC: u32 = 0x3F << 8;
/// `SYNCBUSY.CC0`/`CC1` of a TC unit.
const TC_SYNCBUSY_CC: u32 = 0b11 << 6;

/// Register blocks the adapter drives.
#[derive(Clone, Copy)]
pub struct Samd51Blocks<'a> {
    pub adc: &'a pac::adc0::RegisterBlock,
    pub dac: &'a pac::dac::RegisterBlock,
    pub gclk: &'a pac::gclk::RegisterBlock,
    pub tcc: [&'a pac::tcc0::RegisterBlock; 3],
    pub tc3: &'a pac::tc0::RegisterBlock,
}

/// Peripheral tokens handed over to [`Samd51Port::new`].
pub struct Samd51Peripherals {
    pub adc0: pac::Adc0,
    pub dac: pac::Dac,
    pub gclk: pac::Gclk,
    pub tcc0: pac::Tcc0,
    pub tcc1: pac::Tcc1,
    pub tcc2: pac::Tcc2,
    pub tc3: pac::Tc3,
}

#[derive(Clone, Copy)]
enum Unit<'a> {
    Tcc(&'a pac::tcc0::RegisterBlock),
    Tc(&'a pac::tc0::RegisterBlock),
}

impl Unit<'_> {
    fn class(self) -> TimerClass {
        match self {
            Self::Tcc(_) => TimerClass::Wide,
            Self::Tc(_) => TimerClass::Counter8,
        }
    }
}

/// SAMD51 analog peripherals.
pub struct Samd51Port<'a> {
    regs: Samd51Blocks<'a>,
}

impl Samd51Port<'static> {
    /// Take ownership of the analog peripherals.
    pub fn new(_peripherals: Samd51Peripherals) -> Self {
        // SAFETY: the tokens are consumed by this call, so no other owner
        // can reach these blocks; PAC blocks live at fixed addresses.
        let regs = unsafe {
            Samd51Blocks {
                adc: &*pac::Adc0::ptr(),
                dac: &*pac::Dac::ptr(),
                gclk: &*pac::Gclk::ptr(),
                tcc: [
                    &*pac::Tcc0::ptr(),
                    &*pac::Tcc1::ptr(),
                    &*pac::Tcc2::ptr(),
                ],
                tc3: &*pac::Tc3::ptr(),
            }
        };
        Self::from_blocks(regs)
    }
}

impl<'a> Samd51Port<'a> {
    /// Drive borrowed register blocks.
    pub fn from_blocks(regs: Samd51Blocks<'a>) -> Self {
        Self { regs }
    }

    fn unit(&self, timer: TimerId) -> Option<Unit<'a>> {
        match timer.0 {
            0..=2 => Some(Unit::Tcc(self.regs.tcc[timer.index()])),
            3 => Some(Unit::Tc(self.regs.tc3)),
            _ => None,
        }
    }
}

impl AdcPort for Samd51Port<'_> {
    fn adc_busy(&self, sync: AdcSync) -> bool {
        let s = self.regs.adc.syncbusy().read();
        match sync {
            AdcSync::InputControl => s.inputctrl().bit_is_set(),
            AdcSync::Enable => s.enable().bit_is_set(),
            AdcSync::Resolution => s.ctrlb().bit_is_set(),
            AdcSync::Reference => s.refctrl().bit_is_set(),
            AdcSync::Trigger => s.swtrig().bit_is_set(),
        }
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
        // No input gain stage on this ADC.  The 1.0 V bandgap would need
        // the supply controller, so it selects the default reference.
        self.regs.adc.refctrl().modify(|_, w| match reference {
            Reference::Internal | Reference::Internal2V23 => w.refsel().intvcc0(),
            Reference::External => w.refsel().arefa(),
            Reference::Default | Reference::Internal1V0 | Reference::Internal1V65 => {
                w.refsel().intvcc1()
            }
        });
    }
}

// ── DAC channel switching ─────────────────────────────────────

/// Controller-level DAC access used by [`switch_channel`].
trait DacControl {
    fn controller_enabled(&self) -> bool;

    fn set_controller_enabled(&self, enabled: bool);

    fn enable_syncing(&self) -> bool;

    fn channel_enabled(&self, channel: u8) -> bool;

    fn set_channel_enabled(&self, channel: u8, enabled: bool);
}

impl DacControl for pac::dac::RegisterBlock {
    fn controller_enabled(&self) -> bool {
        self.ctrla().read().enable().bit_is_set()
    }

    fn set_controller_enabled(&self, enabled: bool) {
        self.ctrla().modify(|_, w| w.enable().bit(enabled));
    }

    fn enable_syncing(&self) -> bool {
        self.syncbusy().read().enable().bit_is_set()
    }

    fn channel_enabled(&self, channel: u8) -> bool {
        self.dacctrl(usize::from(channel))
            .read()
            .enable()
            .bit_is_set()
    }

    fn set_channel_enabled(&self, channel: u8, enabled: bool) {
        self.dacctrl(usize::from(channel))
            .modify(|_, w| w.enable().bit(enabled));
    }
}

/// `DACCTRLn` ignores writes while `CTRLA.ENABLE` is set.  The controller
/// goes down for the channel write and comes back up while any channel
/// is still on.
fn switch_channel(dac: &impl DacControl, channel: u8, enabled: bool) {
    if dac.controller_enabled() {
        dac.set_controller_enabled(false);
        await_clear(|| dac.enable_syncing());
    }

    dac.set_channel_enabled(channel, enabled);

    if (0..DAC_CHANNELS).any(|ch| dac.channel_enabled(ch)) {
        dac.set_controller_enabled(true);
        await_clear(|| dac.enable_syncing());
    }
}

impl DacPort for Samd51Port<'_> {
    const DAC_CHANNELS: u8 = DAC_CHANNELS;
    const DAC_ENABLE_BEFORE_DATA: bool = true;

    fn dac_busy(&self, sync: DacSync) -> bool {
        let s = self.regs.dac.syncbusy().read();
        match sync {
            DacSync::Enable => s.enable().bit_is_set(),
            DacSync::Data(DacChannel(0)) => s.data0().bit_is_set(),
            DacSync::Data(_) => s.data1().bit_is_set(),
        }
    }

    fn dac_ready(&self, channel: DacChannel) -> bool {
        // STATUS.READYn sits at bit n.
        self.regs.dac.status().read().bits() & (1 << channel.0) != 0
    }

    fn dac_is_enabled(&self, channel: DacChannel) -> bool {
        let dac = self.regs.dac;
        dac.controller_enabled() && dac.channel_enabled(channel.0)
    }

    fn dac_set_enabled(&mut self, channel: DacChannel, enabled: bool) {
        if channel.0 < DAC_CHANNELS {
            switch_channel(self.regs.dac, channel.0, enabled);
        }
    }

    fn dac_write_data(&mut self, channel: DacChannel, value: u16) {
        if channel.0 < DAC_CHANNELS {
            self.regs
                .dac
                .data(usize::from(channel.0))
                .write(|w| unsafe { w.bits(value) });
        }
    }
}

impl TimerPort for Samd51Port<'_> {
    const TIMER_UNITS: u8 = TIMER_UNITS;

    fn timer_class(&self, timer: TimerId) -> TimerClass {
        self.unit(timer).map_or(TimerClass::Wide, Unit::class)
    }

    fn timer_busy(&self, timer: TimerId, sync: TimerSync) -> bool {
        if sync == TimerSync::Clock {
            return CLOCK_CHANNELS.get(timer.index()).is_some_and(|&id| {
                self.regs.gclk.pchctrl(id).read().chen().bit_is_clear()
            });
        }
        match self.unit(timer) {
            Some(Unit::Tc(tc)) => {
                let s = tc.count8().syncbusy().read();
                match sync {
                    TimerSync::Compare => s.bits() & TC_SYNCBUSY_CC != 0,
                    TimerSync::Period => s.per().bit_is_set(),
                    TimerSync::UpdateLock => s.ctrlb().bit_is_set(),
                    TimerSync::Enable | TimerSync::Control | TimerSync::Clock => {
                        s.swrst().bit_is_set() || s.enable().bit_is_set()
                    }
                }
            }
            Some(Unit::Tcc(tcc)) => {
                let s = tcc.syncbusy().read();
                match sync {
                    TimerSync::Enable | TimerSync::Clock => s.enable().bit_is_set(),
                    TimerSync::Control => s.wave().bit_is_set(),
                    TimerSync::Compare => s.bits() & TCC_SYNCBUSY_CC != 0,
                    TimerSync::Period => s.per().bit_is_set(),
                    TimerSync::UpdateLock => s.ctrlb().bit_is_set(),
                }
            }
            None => false,
        }
    }

    fn timer_connect_clock(&mut self, timer: TimerId) {
        // GEN left at zero: clock generator 0.
        if let Some(&id) = CLOCK_CHANNELS.get(timer.index()) {
            self.regs.gclk.pchctrl(id).write(|w| w.chen().set_bit());
        }
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
                let tc = tc.count8();
                tc.ctrla()
                    .modify(|_, w| w.mode().count8().prescaler().div256());
                tc.wave().write(|w| w.wavegen().npwm());
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
                tcc.ccbuf(usize::from(channel))
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
