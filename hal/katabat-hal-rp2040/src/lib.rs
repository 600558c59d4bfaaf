//! RP2040-specific HAL for the rider firmware
//!
//! Implements the katabat-hal pin traits and the katabat-core clock seam
//! over embassy-rp / embassy-time:
//!
//! - Push-pull output wrappers for the drivetrain and annunciator lines
//! - Pulled-up input wrappers for the active-low sensor lines
//! - Uptime clock over the embassy time driver

#![no_std]

pub mod gpio;
pub mod time;

pub use gpio::{RpInput, RpOutput};
pub use time::Uptime;
