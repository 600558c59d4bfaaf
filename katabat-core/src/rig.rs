//! The hardware bundle handed to the control loop

use embedded_hal::delay::DelayNs;

use crate::traits::{Annunciator, Drivetrain, Monotonic, Sensors, StatusSink};

/// Everything the homing routine and motion cycle touch, in one place.
///
/// The control loop is the sole owner; there is no concurrent access and
/// no locking. Fields are public because the loop borrows them disjointly
/// (feathering, for instance, takes the drivetrain and clock while the
/// sensors sit untouched).
pub struct Rig<S, D, A, C, W, L> {
    /// Trigger / top-limit / near-bottom inputs.
    pub sensors: S,
    /// Brake / clutch / motor outputs.
    pub drive: D,
    /// Sound / light outputs.
    pub annunciator: A,
    /// Monotonic clock shared by every timestamp in the loop.
    pub clock: C,
    /// Sleep provider for poll ticks and brake pulses.
    pub delay: W,
    /// Phase-transition event sink.
    pub status: L,
}

impl<S, D, A, C, W, L> Rig<S, D, A, C, W, L>
where
    S: Sensors,
    D: Drivetrain,
    A: Annunciator,
    C: Monotonic,
    W: DelayNs,
    L: StatusSink,
{
    pub fn new(sensors: S, drive: D, annunciator: A, clock: C, delay: W, status: L) -> Self {
        Self {
            sensors,
            drive,
            annunciator,
            clock,
            delay,
            status,
        }
    }
}
