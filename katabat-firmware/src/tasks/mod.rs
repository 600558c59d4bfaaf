//! Firmware tasks

pub mod rider;
