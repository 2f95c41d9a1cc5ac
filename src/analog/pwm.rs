//! PWM timer allocator.
//!
//! The first write to a timer unit configures the whole unit (clock,
//! prescaler, waveform, period) and every later write through any pin
//! sharing that unit only updates its own compare channel.  The first pin
//! to touch a unit therefore fixes the prescaler for all of them.

use log::{debug, trace, warn};

use super::capability::PwmRoute;
use super::ports::{TimerClass, TimerPort, TimerSync};
use super::resolution::rescale;
use super::state::AnalogState;
use super::sync::await_clear;

/// PWM duty resolution; the period register is always `2^8 - 1`.
pub const PWM_RESOLUTION_BITS: u8 = 8;
pub const PWM_PERIOD: u32 = (1 << PWM_RESOLUTION_BITS) - 1;

/// Set the duty of `route`'s compare channel from a caller-width value.
///
/// Pin routing to the timer function is the caller's job.  A route naming
/// a unit the port does not have is ignored.
pub fn write<P: TimerPort>(port: &mut P, state: &mut AnalogState, route: &PwmRoute, value: u32) {
    if route.timer.0 >= P::TIMER_UNITS {
        warn!("pwm: timer {} not present, write dropped", route.timer.0);
        return;
    }

    let duty = rescale(value, state.write_resolution_bits, PWM_RESOLUTION_BITS);

    if state.is_timer_configured(route.timer) {
        update(port, route, duty);
    } else {
        configure(port, route, duty);
        state.mark_timer_configured(route.timer);
    }
}

fn configure(port: &mut impl TimerPort, route: &PwmRoute, duty: u32) {
    let t = route.timer;
    debug!(
        "pwm: timer {} first use ({:?}), configuring via ch{}",
        t.0,
        port.timer_class(t),
        route.channel
    );

    port.timer_connect_clock(t);
    await_clear(|| port.timer_busy(t, TimerSync::Clock));

    port.timer_set_enabled(t, false);
    await_clear(|| port.timer_busy(t, TimerSync::Enable));

    port.timer_configure_pwm(t);
    await_clear(|| port.timer_busy(t, TimerSync::Control));

    port.timer_set_compare(t, route.channel, duty);
    await_clear(|| port.timer_busy(t, TimerSync::Compare));

    port.timer_set_period(t, PWM_PERIOD);
    await_clear(|| port.timer_busy(t, TimerSync::Period));

    port.timer_set_enabled(t, true);
    await_clear(|| port.timer_busy(t, TimerSync::Enable));
}

fn update(port: &mut impl TimerPort, route: &PwmRoute, duty: u32) {
    let t = route.timer;
    match port.timer_class(t) {
        TimerClass::Counter8 => {
            port.timer_set_compare(t, route.channel, duty);
            await_clear(|| port.timer_busy(t, TimerSync::Compare));
        }
        TimerClass::Wide => {
            // Buffered write lands atomically at the next period boundary.
            port.timer_set_update_lock(t, true);
            await_clear(|| port.timer_busy(t, TimerSync::UpdateLock));
            port.timer_set_compare_buffered(t, route.channel, duty);
            await_clear(|| port.timer_busy(t, TimerSync::Compare));
            port.timer_set_update_lock(t, false);
            await_clear(|| port.timer_busy(t, TimerSync::UpdateLock));
        }
    }
    trace!("pwm: timer {} ch{} duty {}", t.0, route.channel, duty);
}
