//! Semantic status events
//!
//! Emitted at phase transitions, timestamped with the control loop's
//! monotonic clock, and handed to the [`StatusSink`] collaborator. The
//! core never prints; sinks decide how and whether to.
//!
//! [`StatusSink`]: crate::traits::StatusSink

/// Phase-transition events of the homing routine and motion cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Homing finished; rider parked at the top.
    Homed,
    /// Drop started (trigger edge or cycle timer).
    Dropping,
    /// Near-bottom switch tripped; feathering begins.
    Stopping,
    /// Feathering done; rider dwelling at the bottom.
    Stopped,
    /// Bottom pause over; climb sub-cycle running.
    Climbing,
    /// Top-limit switch tripped; rider parked, cycle timer re-armed.
    TopReached,
}

impl Event {
    /// Human-readable phrase, matching the rig's traditional status log.
    pub fn label(&self) -> &'static str {
        match self {
            Event::Homed => "Homed",
            Event::Dropping => "Dropping",
            Event::Stopping => "Stopping",
            Event::Stopped => "Stopped",
            Event::Climbing => "Climbing",
            Event::TopReached => "Top reached",
        }
    }
}
