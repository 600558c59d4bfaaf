//! The motion cycle state machine
//!
//! Four states around the cycle: Idle → Dropping → Stopped → Climbing →
//! Idle. Each polling tick samples the sensors once, walks the state
//! blocks in that fixed order, and commits edge memory last so every block
//! compares against the same previous-tick snapshot. The blocks are
//! sequential `if`s, not a `match`: a transition taken early in the tick
//! lets the next block run in the same tick, which is how a trigger press
//! starts the free fall without waiting a poll period.

use core::time::Duration;

use embedded_hal::delay::DelayNs;

use crate::brake;
use crate::config::Timing;
use crate::drive::DriveCommand;
use crate::edge::{falling_edge, EdgeMemory};
use crate::rig::Rig;
use crate::state::events::Event;
use crate::traits::time::sleep_for;
use crate::traits::{Annunciator, Drivetrain, Monotonic, Sensors, StatusSink};

/// The four phases of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionState {
    /// Parked at the top, waiting for the trigger or the cycle timer.
    Idle,
    /// Free fall down the pole, sound and light on.
    Dropping,
    /// Dwelling at the bottom, brake holding from the last feather pulse.
    Stopped,
    /// Run/slip/hold sub-cycle back up, watching for the top-limit switch.
    Climbing,
}

/// The motion cycle: state, edge memory, and the cycle timestamps.
///
/// Owned by the single control loop. Exactly one timestamp is live per
/// state; the others keep their stale values until their phase restarts.
pub struct MotionCycle {
    state: MotionState,
    edges: EdgeMemory,
    /// Reset only on reaching the top, never at drop start - the automatic
    /// drop timer measures top-to-top.
    cycle_start: Duration,
    /// Start of the bottom dwell (live in Stopped).
    pause_start: Duration,
    /// Start of the current climb sub-cycle (live in Climbing).
    climb_start: Duration,
}

impl MotionCycle {
    /// A freshly homed rig: Idle, edge memory at the idle levels, cycle
    /// timer armed from `now`.
    pub fn new(now: Duration) -> Self {
        Self {
            state: MotionState::Idle,
            edges: EdgeMemory::new(),
            cycle_start: now,
            pause_start: now,
            climb_start: now,
        }
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    /// One polling tick.
    ///
    /// Blocks for the length of the feathering window when a drop reaches
    /// the near-bottom switch; every other path returns promptly. The
    /// caller sleeps the poll period between ticks.
    pub fn tick<S, D, A, C, W, L>(&mut self, timing: &Timing, rig: &mut Rig<S, D, A, C, W, L>)
    where
        S: Sensors,
        D: Drivetrain,
        A: Annunciator,
        C: Monotonic,
        W: DelayNs,
        L: StatusSink,
    {
        let now = rig.clock.now();
        let sample = rig.sensors.sample();

        if self.state == MotionState::Idle {
            let timed_out = now.saturating_sub(self.cycle_start) > timing.cycle_period;
            if falling_edge(sample.trigger, self.edges.trigger()) || timed_out {
                rig.status.status(now, Event::Dropping);
                self.state = MotionState::Dropping;
            }
        }

        if self.state == MotionState::Dropping {
            rig.drive.set_drive(DriveCommand::FreeFall);
            rig.annunciator.set_active(true);

            if falling_edge(sample.near_bottom, self.edges.near_bottom()) {
                rig.status.status(rig.clock.now(), Event::Stopping);
                brake::feather(&mut rig.drive, &rig.clock, &mut rig.delay, timing);
                rig.annunciator.set_active(false);
                self.pause_start = rig.clock.now();
                rig.status.status(self.pause_start, Event::Stopped);
                self.state = MotionState::Stopped;
            }
        }

        if self.state == MotionState::Stopped {
            // No drive command here: the brake stays as feathering left it.
            let now = rig.clock.now();
            if now.saturating_sub(self.pause_start) > timing.bottom_pause {
                self.climb_start = now;
                rig.status.status(now, Event::Climbing);
                self.state = MotionState::Climbing;
            }
        }

        if self.state == MotionState::Climbing {
            let now = rig.clock.now();
            let run_end = timing.climb_run;
            let fall_end = run_end + timing.climb_fall;
            let hold_end = fall_end + timing.climb_pause;

            let mut elapsed = now.saturating_sub(self.climb_start);
            if elapsed >= hold_end {
                // Sub-cycle complete; re-arm phase 1 from this instant.
                self.climb_start = now;
                elapsed = Duration::ZERO;
            }

            if elapsed < run_end {
                rig.drive.set_drive(DriveCommand::Climb);
            } else if elapsed < fall_end {
                rig.drive.set_drive(DriveCommand::SpinAssist);
            } else {
                rig.drive.set_drive(DriveCommand::ClimbHold);
            }

            if falling_edge(sample.top_limit, self.edges.top_limit()) {
                rig.drive.set_drive(DriveCommand::Parked);
                self.cycle_start = rig.clock.now();
                rig.status.status(self.cycle_start, Event::TopReached);
                self.state = MotionState::Idle;
            }
        }

        self.edges.commit(sample);
    }

    /// The main loop: tick, sleep the poll period, forever.
    pub fn run<S, D, A, C, W, L>(mut self, timing: &Timing, rig: &mut Rig<S, D, A, C, W, L>) -> !
    where
        S: Sensors,
        D: Drivetrain,
        A: Annunciator,
        C: Monotonic,
        W: DelayNs,
        L: StatusSink,
    {
        loop {
            self.tick(timing, rig);
            sleep_for(&mut rig.delay, timing.poll_period);
        }
    }
}
