//! Katabat - Fire-Pole Rider Firmware
//!
//! Main firmware binary for RP2040-based rider rigs. Boots, wires the
//! eight GPIO lines for the selected board, homes the rider to the top of
//! the pole, and runs the drop/stop/pause/climb cycle forever.
//!
//! Named after katabatic winds - the ones that only blow downhill.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

mod boards;
mod status;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Katabat firmware starting...");

    let p = embassy_rp::init(Default::default());
    let rig = boards::rig(p);
    info!("Rig wired, outputs parked");

    spawner.must_spawn(tasks::rider::rider_task(rig));
}
