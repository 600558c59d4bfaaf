//! The rider control task
//!
//! Hosts the whole control loop: homing, then the motion cycle. The loop
//! is cooperative single-threaded by design and sleeps with blocking
//! delays, so it owns this executor - nothing else is spawned alongside
//! it.

use embassy_time::Delay;
use katabat_core::config::Timing;
use katabat_core::homing;
use katabat_core::rig::Rig;
use katabat_core::state::MotionCycle;
use katabat_core::traits::Monotonic;
use katabat_drivers::{PinAnnunciator, PinDrivetrain, PinSensors};
use katabat_hal_rp2040::{RpInput, RpOutput, Uptime};

use crate::status::DefmtStatus;

/// The concrete rig this firmware drives.
pub type RiderRig = Rig<
    PinSensors<RpInput, RpInput, RpInput>,
    PinDrivetrain<RpOutput, RpOutput, RpOutput>,
    PinAnnunciator<RpOutput, RpOutput>,
    Uptime,
    Delay,
    DefmtStatus,
>;

/// Control task - homes the rider, then cycles forever.
#[embassy_executor::task]
pub async fn rider_task(mut rig: RiderRig) -> ! {
    let timing = Timing::default();
    if let Err(error) = timing.validate() {
        defmt::panic!("invalid timing: {}", defmt::Debug2Format(&error));
    }

    homing::home(&mut rig, &timing);

    let cycle = MotionCycle::new(rig.clock.now());
    cycle.run(&timing, &mut rig)
}
