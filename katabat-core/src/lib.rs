//! Board-agnostic core logic for the fire-pole rider firmware
//!
//! This crate contains all control logic that does not depend on specific
//! hardware implementations:
//!
//! - Hardware abstraction traits (sensor bank, drivetrain, annunciator, clock)
//! - Edge detection over the active-low sensor lines
//! - The drive command vocabulary
//! - The homing routine that parks the rider at the top on boot
//! - The brake feathering routine for smooth stops
//! - The four-state drop/stop/pause/climb motion cycle
//! - Timing configuration
//!
//! The control loop is single-threaded and cooperative: one tick every poll
//! period, with homing and feathering as deliberate blocking sub-loops.

// no_std for the target; host test builds keep std for proptest.
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod brake;
pub mod config;
pub mod drive;
pub mod edge;
pub mod homing;
pub mod rig;
pub mod state;
pub mod traits;

#[cfg(test)]
pub(crate) mod testutil;
