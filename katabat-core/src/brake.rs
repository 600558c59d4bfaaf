//! Brake feathering
//!
//! Converts the abrupt stop at the bottom of a drop into a pulsed
//! deceleration: brake on for the duty portion of each pulse, released for
//! the remainder, until the slow-down window has elapsed.
//!
//! This is a blocking sub-procedure. No sensors are polled while it runs -
//! the rider is already past the near-bottom switch, and a spurious
//! re-trigger must not interrupt braking. Edges arriving inside the window
//! are lost; that is the documented trade-off, not a bug.

use embedded_hal::delay::DelayNs;

use crate::config::Timing;
use crate::drive::DriveCommand;
use crate::traits::time::sleep_for;
use crate::traits::{Drivetrain, Monotonic};

/// Run the feathering window to completion.
///
/// The drivetrain is left in the state of the final pulse; the caller's
/// Stopped phase relies on the brake remaining engaged and issues no new
/// command of its own.
pub fn feather<D, C, W>(drive: &mut D, clock: &C, delay: &mut W, timing: &Timing)
where
    D: Drivetrain,
    C: Monotonic,
    W: DelayNs,
{
    let start = clock.now();
    while clock.now().saturating_sub(start) < timing.bottom_slow {
        drive.set_drive(DriveCommand::Parked);
        sleep_for(delay, timing.brake_on());
        drive.set_drive(DriveCommand::FreeFall);
        sleep_for(delay, timing.brake_off());
    }
}
