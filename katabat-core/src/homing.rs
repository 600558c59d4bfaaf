//! Homing routine
//!
//! Runs once at boot, before the motion cycle exists, and establishes the
//! only known-safe starting state: rider parked at the top-limit switch.
//!
//! Blocking, and deliberately without a timeout - an unhomed rig must not
//! proceed, so a top-limit switch that never triggers leaves us climbing
//! forever rather than guessing at a position.

use embedded_hal::delay::DelayNs;

use crate::config::Timing;
use crate::drive::DriveCommand;
use crate::rig::Rig;
use crate::state::events::Event;
use crate::traits::time::sleep_for;
use crate::traits::{Annunciator, Drivetrain, Monotonic, Sensors, StatusSink};

/// Drive the rider to the top of the pole, wherever it starts.
///
/// If the top-limit line already reads triggered (low) the rig is parked
/// with a single command and no polling. Otherwise the rider climbs on the
/// configured poll period until the switch shows a falling edge. The
/// routine keeps its own previous-value for the switch, primed to the idle
/// level, so an already-triggered switch takes the first branch instead of
/// reading as an edge.
pub fn home<S, D, A, C, W, L>(rig: &mut Rig<S, D, A, C, W, L>, timing: &Timing)
where
    S: Sensors,
    D: Drivetrain,
    A: Annunciator,
    C: Monotonic,
    W: DelayNs,
    L: StatusSink,
{
    let entry = rig.sensors.sample();
    if !entry.top_limit {
        rig.drive.set_drive(DriveCommand::Parked);
    } else {
        let mut previous_top = true;
        loop {
            rig.drive.set_drive(DriveCommand::Climb);
            let sample = rig.sensors.sample();
            if crate::edge::falling_edge(sample.top_limit, previous_top) {
                rig.drive.set_drive(DriveCommand::Parked);
                break;
            }
            previous_top = sample.top_limit;
            sleep_for(&mut rig.delay, timing.poll_period);
        }
    }
    let now = rig.clock.now();
    rig.status.status(now, Event::Homed);
}
