//! Hardware abstraction traits
//!
//! These traits define the seams between the control logic and whatever
//! actually moves electrons: the sensor bank, the drivetrain, the
//! sound/light annunciator, the monotonic clock, and the status side
//! channel. Sleeping goes through `embedded_hal::delay::DelayNs`.

pub mod io;
pub mod status;
pub mod time;

pub use io::{Annunciator, Drivetrain, Sensors};
pub use status::StatusSink;
pub use time::Monotonic;
