//! Board pin maps
//!
//! The rig has been wired on two boards. The default map matches the Pico
//! breadboard build; enable the `board-feather` feature for the Feather
//! RP2040 build. Either way the logical lines are the same: five outputs
//! (sound, light, brake, clutch, motor) and three pulled-up sensor inputs
//! (trigger, top-limit, near-bottom).

use embassy_rp::gpio::AnyPin;
use embassy_rp::{Peri, Peripherals};
use embassy_time::Delay;
use katabat_core::rig::Rig;
use katabat_drivers::{PinAnnunciator, PinDrivetrain, PinSensors};
use katabat_hal_rp2040::{RpInput, RpOutput, Uptime};

use crate::status::DefmtStatus;
use crate::tasks::rider::RiderRig;

/// Pico breadboard wiring: outputs on GP2-GP6, sensors on GP7-GP9.
#[cfg(not(feature = "board-feather"))]
pub fn rig(p: Peripherals) -> RiderRig {
    defmt::info!("Pin map: Pico breadboard");
    build(
        Peri::<AnyPin>::from(p.PIN_2),  // sound
        Peri::<AnyPin>::from(p.PIN_3),  // light
        Peri::<AnyPin>::from(p.PIN_4),  // brake
        Peri::<AnyPin>::from(p.PIN_5),  // clutch
        Peri::<AnyPin>::from(p.PIN_6),  // motor
        Peri::<AnyPin>::from(p.PIN_7),  // trigger
        Peri::<AnyPin>::from(p.PIN_8),  // top-limit
        Peri::<AnyPin>::from(p.PIN_9),  // near-bottom
    )
}

/// Feather RP2040 wiring: outputs on GP6/GP7/GP8/GP9/GP10, sensors on
/// GP11-GP13.
#[cfg(feature = "board-feather")]
pub fn rig(p: Peripherals) -> RiderRig {
    defmt::info!("Pin map: Feather RP2040");
    build(
        Peri::<AnyPin>::from(p.PIN_6),  // sound
        Peri::<AnyPin>::from(p.PIN_7),  // light
        Peri::<AnyPin>::from(p.PIN_8),  // brake
        Peri::<AnyPin>::from(p.PIN_9),  // clutch
        Peri::<AnyPin>::from(p.PIN_10), // motor
        Peri::<AnyPin>::from(p.PIN_11), // trigger
        Peri::<AnyPin>::from(p.PIN_12), // top-limit
        Peri::<AnyPin>::from(p.PIN_13), // near-bottom
    )
}

#[allow(clippy::too_many_arguments)]
fn build(
    sound: Peri<'static, AnyPin>,
    light: Peri<'static, AnyPin>,
    brake: Peri<'static, AnyPin>,
    clutch: Peri<'static, AnyPin>,
    motor: Peri<'static, AnyPin>,
    trigger: Peri<'static, AnyPin>,
    top_limit: Peri<'static, AnyPin>,
    near_bottom: Peri<'static, AnyPin>,
) -> RiderRig {
    Rig::new(
        PinSensors::new(
            RpInput::pulled_up(trigger),
            RpInput::pulled_up(top_limit),
            RpInput::pulled_up(near_bottom),
        ),
        PinDrivetrain::new(
            RpOutput::new(brake),
            RpOutput::new(clutch),
            RpOutput::new(motor),
        ),
        PinAnnunciator::new(RpOutput::new(sound), RpOutput::new(light)),
        Uptime,
        Delay,
        DefmtStatus,
    )
}
