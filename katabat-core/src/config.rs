//! Timing configuration
//!
//! All timing is fixed at build/start time. The struct is built once in the
//! firmware, validated, and passed by reference into the homing routine and
//! the motion cycle; nothing mutates it afterwards.

use core::time::Duration;

/// Timing constants for the drop/stop/pause/climb cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Timing {
    /// Time between automatic drops when nobody presses the trigger.
    pub cycle_period: Duration,
    /// Powered-climb phase of the climb sub-cycle.
    pub climb_run: Duration,
    /// Free-spin slip phase of the climb sub-cycle.
    pub climb_fall: Duration,
    /// Braked-hold phase of the climb sub-cycle.
    pub climb_pause: Duration,
    /// Dwell at the bottom of the pole before climbing back.
    pub bottom_pause: Duration,
    /// Total duration of the brake feathering window.
    pub bottom_slow: Duration,
    /// Period of one brake feathering pulse.
    pub brake_pulse: Duration,
    /// Percentage of each pulse spent with the brake set, 1..=100.
    /// Integer percent keeps the pulse split exact.
    pub brake_duty_pct: u8,
    /// Sensor polling period for homing and the main loop.
    pub poll_period: Duration,
}

impl Default for Timing {
    /// Values tuned on the original rig.
    fn default() -> Self {
        Self {
            cycle_period: Duration::from_secs(5 * 60),
            climb_run: Duration::from_secs(2),
            climb_fall: Duration::from_millis(500),
            climb_pause: Duration::from_millis(500),
            bottom_pause: Duration::from_secs(3),
            bottom_slow: Duration::from_secs(1),
            brake_pulse: Duration::from_millis(200),
            brake_duty_pct: 25,
            poll_period: Duration::from_millis(5),
        }
    }
}

impl Timing {
    /// Braked portion of one feathering pulse.
    pub fn brake_on(&self) -> Duration {
        self.brake_pulse * self.brake_duty_pct as u32 / 100
    }

    /// Unbraked remainder of one feathering pulse.
    pub fn brake_off(&self) -> Duration {
        self.brake_pulse.saturating_sub(self.brake_on())
    }

    /// Reject configurations the control loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_period.is_zero() {
            return Err(ConfigError::ZeroPollPeriod);
        }
        if self.brake_pulse.is_zero() {
            return Err(ConfigError::ZeroBrakePulse);
        }
        if self.brake_duty_pct == 0 || self.brake_duty_pct > 100 {
            return Err(ConfigError::DutyOutOfRange);
        }
        if self.cycle_period.is_zero() {
            return Err(ConfigError::ZeroCyclePeriod);
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Polling period of zero would spin without yielding.
    ZeroPollPeriod,
    /// A zero-length brake pulse makes feathering a busy loop.
    ZeroBrakePulse,
    /// Brake duty must be 1..=100 percent.
    DutyOutOfRange,
    /// The automatic drop timer must have a nonzero period.
    ZeroCyclePeriod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_is_valid() {
        assert_eq!(Timing::default().validate(), Ok(()));
    }

    #[test]
    fn brake_pulse_split() {
        let timing = Timing::default();
        // 200ms pulse at 25% duty: 50ms braked, 150ms free
        assert_eq!(timing.brake_on(), Duration::from_millis(50));
        assert_eq!(timing.brake_off(), Duration::from_millis(150));
    }

    #[test]
    fn full_duty_leaves_no_free_portion() {
        let timing = Timing {
            brake_duty_pct: 100,
            ..Timing::default()
        };
        assert_eq!(timing.validate(), Ok(()));
        assert_eq!(timing.brake_off(), Duration::ZERO);
    }

    #[test]
    fn rejects_bad_values() {
        let zero_poll = Timing {
            poll_period: Duration::ZERO,
            ..Timing::default()
        };
        assert_eq!(zero_poll.validate(), Err(ConfigError::ZeroPollPeriod));

        let zero_pulse = Timing {
            brake_pulse: Duration::ZERO,
            ..Timing::default()
        };
        assert_eq!(zero_pulse.validate(), Err(ConfigError::ZeroBrakePulse));

        for duty in [0, 101, 255] {
            let bad_duty = Timing {
                brake_duty_pct: duty,
                ..Timing::default()
            };
            assert_eq!(bad_duty.validate(), Err(ConfigError::DutyOutOfRange));
        }

        let zero_cycle = Timing {
            cycle_period: Duration::ZERO,
            ..Timing::default()
        };
        assert_eq!(zero_cycle.validate(), Err(ConfigError::ZeroCyclePeriod));
    }
}
