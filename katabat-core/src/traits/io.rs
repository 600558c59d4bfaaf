//! I/O device traits

use crate::drive::DriveCommand;
use crate::edge::SensorSample;

/// The three active-low sensor inputs, read as one snapshot.
pub trait Sensors {
    /// Sample the raw line levels. Called once per polling tick.
    fn sample(&mut self) -> SensorSample;
}

/// The brake/clutch/motor output lines.
///
/// A dumb setter: implementations write all three lines for every call and
/// never leave them in a partial state between calls. Repeating a command
/// has no observable effect beyond the lines staying put.
pub trait Drivetrain {
    fn set_drive(&mut self, command: DriveCommand);
}

/// Sound and light outputs, switched together during a drop.
pub trait Annunciator {
    fn set_active(&mut self, on: bool);
}
