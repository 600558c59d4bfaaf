//! Uptime clock

use core::time::Duration;

use embassy_time::Instant;
use katabat_core::traits::Monotonic;

/// Monotonic clock over the embassy time driver, measured from boot.
///
/// 64-bit microseconds; wraps after half a million years, which outlasts
/// the fire house.
#[derive(Clone, Copy, Default)]
pub struct Uptime;

impl Monotonic for Uptime {
    fn now(&self) -> Duration {
        Duration::from_micros(Instant::now().as_micros())
    }
}
