//! Device implementations for the rider rig
//!
//! Concrete implementations of the katabat-core device traits over the
//! katabat-hal pin traits:
//!
//! - [`drivetrain::PinDrivetrain`] - brake/clutch/motor output lines
//! - [`sensors::PinSensors`] - trigger/top-limit/near-bottom inputs
//! - [`annunciator::PinAnnunciator`] - sound/light output lines

#![no_std]
#![deny(unsafe_code)]

pub mod annunciator;
pub mod drivetrain;
pub mod sensors;

pub use annunciator::PinAnnunciator;
pub use drivetrain::PinDrivetrain;
pub use sensors::PinSensors;

#[cfg(test)]
pub(crate) mod mock;
