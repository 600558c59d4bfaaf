//! Drivetrain command vocabulary
//!
//! The drivetrain has three binary control lines: brake, clutch, motor.
//! Only five of the eight combinations are meaningful for the rig, so the
//! command set is a closed enum and the unintended combinations are
//! unrepresentable. The sound/light annunciator lines are deliberately not
//! part of this vocabulary; they belong to the motion cycle.

/// One complete drivetrain configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriveCommand {
    /// Braked, disengaged, motor off. The rider holds position.
    Parked,
    /// Clutch in, motor on. The rider is driven up the pole.
    Climb,
    /// Motor on with no brake or clutch. Brief controlled slip while
    /// climbing.
    SpinAssist,
    /// Braked with the motor still running. Holds position mid-climb.
    ClimbHold,
    /// Everything released. Gravity does the descending.
    FreeFall,
}

/// Levels of the three drivetrain output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriveLines {
    pub brake: bool,
    pub clutch: bool,
    pub motor: bool,
}

impl DriveCommand {
    /// The line levels this command asserts.
    pub const fn lines(self) -> DriveLines {
        let (brake, clutch, motor) = match self {
            DriveCommand::Parked => (true, false, false),
            DriveCommand::Climb => (false, true, true),
            DriveCommand::SpinAssist => (false, false, true),
            DriveCommand::ClimbHold => (true, false, true),
            DriveCommand::FreeFall => (false, false, false),
        };
        DriveLines {
            brake,
            clutch,
            motor,
        }
    }
}
