//! Katabat Hardware Abstraction Layer
//!
//! This crate defines the digital I/O traits implemented by chip-specific
//! HALs (currently RP2040). The rider rig is pure binary I/O: three
//! active-low sensor inputs (trigger, top-limit, near-bottom) and five
//! outputs (brake, clutch, motor, sound, light), so GPIO is the whole
//! hardware surface.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (katabat-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  katabat-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  katabat-hal-rp2040 (embassy-rp pins)   │
//! └─────────────────────────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
