//! Shared fakes for control-loop tests
//!
//! Time is simulated: the clock only moves when the fake delay sleeps, so
//! scenarios are exact and instantaneous. Sensor lines follow a script
//! keyed to the simulated clock, and the output fakes record transitions
//! with timestamps.

use core::cell::Cell;
use core::time::Duration;

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::drive::DriveCommand;
use crate::edge::SensorSample;
use crate::rig::Rig;
use crate::state::events::Event;
use crate::state::machine::MotionCycle;
use crate::config::Timing;
use crate::traits::time::sleep_for;
use crate::traits::{Annunciator, Drivetrain, Monotonic, Sensors, StatusSink};

/// Simulated monotonic clock, advanced only by [`SimDelay`].
pub(crate) struct SimClock {
    now_ns: Cell<u128>,
}

impl SimClock {
    pub(crate) fn new() -> Self {
        Self {
            now_ns: Cell::new(0),
        }
    }

    pub(crate) fn advance(&self, by: Duration) {
        self.now_ns.set(self.now_ns.get() + by.as_nanos());
    }
}

impl Monotonic for SimClock {
    fn now(&self) -> Duration {
        let ns = self.now_ns.get();
        Duration::from_nanos(ns as u64)
    }
}

/// Delay provider that advances the shared clock instead of sleeping.
pub(crate) struct SimDelay<'a> {
    clock: &'a SimClock,
}

impl<'a> SimDelay<'a> {
    pub(crate) fn new(clock: &'a SimClock) -> Self {
        Self { clock }
    }
}

impl DelayNs for SimDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance(Duration::from_nanos(ns as u64));
    }
}

/// One-shot schedule for the three sensor lines.
///
/// Each line idles high (pull-up) and goes low from its scheduled instant
/// onward. The edge-based control logic never needs a release.
pub(crate) struct LineScript {
    trigger_low_at: Cell<Option<Duration>>,
    top_limit_low_at: Cell<Option<Duration>>,
    near_bottom_low_at: Cell<Option<Duration>>,
}

impl LineScript {
    pub(crate) fn new() -> Self {
        Self {
            trigger_low_at: Cell::new(None),
            top_limit_low_at: Cell::new(None),
            near_bottom_low_at: Cell::new(None),
        }
    }

    pub(crate) fn set_trigger_low_at(&self, at: Duration) {
        self.trigger_low_at.set(Some(at));
    }

    pub(crate) fn set_top_limit_low_at(&self, at: Duration) {
        self.top_limit_low_at.set(Some(at));
    }

    pub(crate) fn set_near_bottom_low_at(&self, at: Duration) {
        self.near_bottom_low_at.set(Some(at));
    }

    fn level(schedule: &Cell<Option<Duration>>, now: Duration) -> bool {
        match schedule.get() {
            Some(at) => now < at,
            None => true,
        }
    }

    fn sample(&self, now: Duration) -> SensorSample {
        SensorSample {
            trigger: Self::level(&self.trigger_low_at, now),
            top_limit: Self::level(&self.top_limit_low_at, now),
            near_bottom: Self::level(&self.near_bottom_low_at, now),
        }
    }
}

/// Sensor bank reading the script against the simulated clock.
pub(crate) struct ScriptSensors<'a> {
    clock: &'a SimClock,
    script: &'a LineScript,
    samples_taken: usize,
}

impl<'a> ScriptSensors<'a> {
    pub(crate) fn new(clock: &'a SimClock, script: &'a LineScript) -> Self {
        Self {
            clock,
            script,
            samples_taken: 0,
        }
    }

    pub(crate) fn samples_taken(&self) -> usize {
        self.samples_taken
    }
}

impl Sensors for ScriptSensors<'_> {
    fn sample(&mut self) -> SensorSample {
        self.samples_taken += 1;
        self.script.sample(self.clock.now())
    }
}

/// Drivetrain fake recording timestamped command transitions.
///
/// Repeated identical commands bump the call counter but add no
/// transition, which is exactly the idempotence the trait promises.
pub(crate) struct RecordingDrive<'a> {
    clock: &'a SimClock,
    transitions: Vec<(Duration, DriveCommand), 64>,
    calls: usize,
    last: Option<DriveCommand>,
}

impl<'a> RecordingDrive<'a> {
    pub(crate) fn new(clock: &'a SimClock) -> Self {
        Self {
            clock,
            transitions: Vec::new(),
            calls: 0,
            last: None,
        }
    }

    pub(crate) fn transitions(&self) -> &[(Duration, DriveCommand)] {
        &self.transitions
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls
    }

    /// The command in force at `t` (the latest transition at or before it).
    pub(crate) fn command_at(&self, t: Duration) -> Option<DriveCommand> {
        self.transitions
            .iter()
            .take_while(|(at, _)| *at <= t)
            .last()
            .map(|(_, command)| *command)
    }
}

impl Drivetrain for RecordingDrive<'_> {
    fn set_drive(&mut self, command: DriveCommand) {
        self.calls += 1;
        if self.last != Some(command) {
            self.last = Some(command);
            self.transitions
                .push((self.clock.now(), command))
                .expect("transition log full");
        }
    }
}

/// Annunciator fake recording timestamped on/off transitions.
pub(crate) struct RecordingAnnunciator<'a> {
    clock: &'a SimClock,
    transitions: Vec<(Duration, bool), 16>,
    last: Option<bool>,
}

impl<'a> RecordingAnnunciator<'a> {
    pub(crate) fn new(clock: &'a SimClock) -> Self {
        Self {
            clock,
            transitions: Vec::new(),
            last: None,
        }
    }

    pub(crate) fn transitions(&self) -> &[(Duration, bool)] {
        &self.transitions
    }
}

impl Annunciator for RecordingAnnunciator<'_> {
    fn set_active(&mut self, on: bool) {
        if self.last != Some(on) {
            self.last = Some(on);
            self.transitions
                .push((self.clock.now(), on))
                .expect("annunciator log full");
        }
    }
}

/// Status sink recording every event with its timestamp.
pub(crate) struct RecordingStatus {
    events: Vec<(Duration, Event), 16>,
}

impl RecordingStatus {
    pub(crate) fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub(crate) fn events(&self) -> &[(Duration, Event)] {
        &self.events
    }
}

impl StatusSink for RecordingStatus {
    fn status(&mut self, at: Duration, event: Event) {
        self.events.push((at, event)).expect("event log full");
    }
}

pub(crate) type SimRig<'a> = Rig<
    ScriptSensors<'a>,
    RecordingDrive<'a>,
    RecordingAnnunciator<'a>,
    &'a SimClock,
    SimDelay<'a>,
    RecordingStatus,
>;

/// A complete simulated rig over one clock and one line script.
pub(crate) fn sim_rig<'a>(clock: &'a SimClock, script: &'a LineScript) -> SimRig<'a> {
    Rig::new(
        ScriptSensors::new(clock, script),
        RecordingDrive::new(clock),
        RecordingAnnunciator::new(clock),
        clock,
        SimDelay::new(clock),
        RecordingStatus::new(),
    )
}

/// Tick the cycle on the poll period until the simulated clock reaches
/// `deadline`, mirroring [`MotionCycle::run`].
pub(crate) fn run_until(
    cycle: &mut MotionCycle,
    rig: &mut SimRig<'_>,
    timing: &Timing,
    deadline: Duration,
) {
    while rig.clock.now() < deadline {
        cycle.tick(timing, rig);
        sleep_for(&mut rig.delay, timing.poll_period);
    }
}
