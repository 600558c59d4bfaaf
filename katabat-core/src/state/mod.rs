//! The drop/stop/pause/climb motion cycle
//!
//! The authoritative runtime behavior of the rig. The state machine is
//! explicit, finite, and deterministic: four states polled on a fixed
//! tick, all timing read from one monotonic clock.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{MotionCycle, MotionState};
