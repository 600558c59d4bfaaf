//! Status side channel

use core::time::Duration;

use crate::state::events::Event;

/// Receives semantic phase-transition events from the control loop.
///
/// The timestamp comes from the same monotonic clock the state machine
/// runs on. Whether and how events get printed is the sink's business; the
/// firmware logs them over defmt/RTT, tests record them.
pub trait StatusSink {
    fn status(&mut self, at: Duration, event: Event);
}

/// Sink that drops everything.
pub struct NullStatus;

impl StatusSink for NullStatus {
    fn status(&mut self, _at: Duration, _event: Event) {}
}
