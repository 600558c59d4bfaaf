//! GPIO drivetrain

use katabat_core::drive::DriveCommand;
use katabat_core::traits::Drivetrain;
use katabat_hal::OutputPin;

/// Drivetrain over three output pins.
///
/// Every command writes all three lines; the outputs are never left in a
/// partial state between calls. Construction parks the rig so the lines
/// are in a defined configuration before homing runs.
pub struct PinDrivetrain<B, C, M> {
    brake: B,
    clutch: C,
    motor: M,
}

impl<B, C, M> PinDrivetrain<B, C, M>
where
    B: OutputPin,
    C: OutputPin,
    M: OutputPin,
{
    pub fn new(brake: B, clutch: C, motor: M) -> Self {
        let mut drivetrain = Self {
            brake,
            clutch,
            motor,
        };
        drivetrain.set_drive(DriveCommand::Parked);
        drivetrain
    }
}

impl<B, C, M> Drivetrain for PinDrivetrain<B, C, M>
where
    B: OutputPin,
    C: OutputPin,
    M: OutputPin,
{
    fn set_drive(&mut self, command: DriveCommand) {
        let lines = command.lines();
        self.brake.set_state(lines.brake);
        self.clutch.set_state(lines.clutch);
        self.motor.set_state(lines.motor);
    }
}
