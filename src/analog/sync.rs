//! Synchronisation barriers.
//!
//! Control-register writes on these peripherals cross a clock-domain
//! boundary and land asynchronously.  A dependent write or read must not
//! be issued until the peripheral reports the previous one complete.
//!
//! Both helpers busy-spin with no timeout: a flag that never changes is a
//! hardware fault and blocks forever.

/// Spin until `busy` reports the peripheral is no longer synchronising.
#[inline]
pub fn await_clear(mut busy: impl FnMut() -> bool) {
    while busy() {
        core::hint::spin_loop();
    }
}

/// Spin until `ready` reports the awaited status bit is set.
#[inline]
pub fn await_set(mut ready: impl FnMut() -> bool) {
    while !ready() {
        core::hint::spin_loop();
    }
}
