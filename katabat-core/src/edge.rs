//! Edge detection over the sensor lines
//!
//! The three sensors are active-low behind pull-ups: an idle line reads
//! `true`, a pressed button or closed limit switch pulls it to `false`.
//! A physical trigger event is therefore observed as a falling edge, and
//! release as a rising edge.
//!
//! The detectors themselves are pure; all state lives in [`EdgeMemory`],
//! owned by the control loop.

/// True iff the line changed and now reads high.
pub fn rising_edge(current: bool, previous: bool) -> bool {
    current != previous && current
}

/// True iff the line changed and now reads low.
pub fn falling_edge(current: bool, previous: bool) -> bool {
    current != previous && !current
}

/// Raw line levels of the three sensors, sampled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSample {
    /// Manual drop trigger.
    pub trigger: bool,
    /// Limit switch at the parked position.
    pub top_limit: bool,
    /// Switch just above the bottom of the pole.
    pub near_bottom: bool,
}

impl SensorSample {
    /// Levels of an untouched rig: all lines pulled up.
    pub const IDLE: Self = Self {
        trigger: true,
        top_limit: true,
        near_bottom: true,
    };
}

/// Previous-tick sample for each monitored sensor.
///
/// Starts at the idle levels, so a sensor that is already triggered at
/// power-on is seen as a level, not misread as an edge on the first tick.
/// Committed exactly once per tick, after every state block has compared
/// against it; within a tick all comparisons see the same snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeMemory {
    previous: SensorSample,
}

impl Default for EdgeMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeMemory {
    /// Memory primed with the sensors' idle levels.
    pub const fn new() -> Self {
        Self {
            previous: SensorSample::IDLE,
        }
    }

    /// Previous trigger level.
    pub fn trigger(&self) -> bool {
        self.previous.trigger
    }

    /// Previous top-limit level.
    pub fn top_limit(&self) -> bool {
        self.previous.top_limit
    }

    /// Previous near-bottom level.
    pub fn near_bottom(&self) -> bool {
        self.previous.near_bottom
    }

    /// Replace the remembered sample. Call once, at the end of the tick.
    pub fn commit(&mut self, sample: SensorSample) {
        self.previous = sample;
    }
}
