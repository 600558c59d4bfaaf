//! Mock pins for driver tests

use core::cell::Cell;

use katabat_hal::{InputPin, OutputPin};

/// Output pin fake tracking its driven level and write count.
pub(crate) struct MockOutput {
    high: bool,
    writes: usize,
}

impl MockOutput {
    pub(crate) fn new() -> Self {
        Self {
            high: false,
            writes: 0,
        }
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes
    }
}

impl OutputPin for MockOutput {
    fn set_high(&mut self) {
        self.high = true;
        self.writes += 1;
    }

    fn set_low(&mut self) {
        self.high = false;
        self.writes += 1;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input pin fake with an externally settable level.
pub(crate) struct MockInput {
    level: Cell<bool>,
}

impl MockInput {
    pub(crate) fn high() -> Self {
        Self {
            level: Cell::new(true),
        }
    }

    pub(crate) fn low() -> Self {
        Self {
            level: Cell::new(false),
        }
    }

    pub(crate) fn set_level(&self, high: bool) {
        self.level.set(high);
    }
}

impl InputPin for MockInput {
    fn is_high(&self) -> bool {
        self.level.get()
    }
}
