//! Clock abstraction
//!
//! `embedded-hal` provides a delay trait but no monotonic clock, so the
//! clock seam is ours. The firmware implements it over `embassy_time`;
//! tests implement it over a counter advanced by the fake delay.

use core::time::Duration;

use embedded_hal::delay::DelayNs;

/// A monotonic clock measured from an arbitrary epoch (typically boot).
///
/// All cycle timestamps and elapsed-time checks in the control loop read
/// this one clock; it never goes backwards.
pub trait Monotonic {
    fn now(&self) -> Duration;
}

impl<M: Monotonic + ?Sized> Monotonic for &M {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Block for `duration` on the given delay provider.
///
/// `DelayNs` works in `u32` nanoseconds; everything the control loop
/// sleeps for (poll ticks, brake pulses) is far below the ~4 s limit of a
/// single `delay_ns` call, but split anyway so an oversized configuration
/// degrades to a long sleep instead of a truncated one.
pub fn sleep_for<W: DelayNs>(delay: &mut W, duration: Duration) {
    let mut remaining_ns = duration.as_nanos();
    while remaining_ns > u32::MAX as u128 {
        delay.delay_ns(u32::MAX);
        remaining_ns -= u32::MAX as u128;
    }
    delay.delay_ns(remaining_ns as u32);
}
