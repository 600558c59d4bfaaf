//! GPIO wrappers
//!
//! Thin adapters from embassy-rp pins to the katabat-hal traits. Sensor
//! inputs get the internal pull-up, matching the rig's active-low wiring;
//! outputs come up low.

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;

/// Push-pull output line.
pub struct RpOutput {
    pin: Output<'static>,
}

impl RpOutput {
    /// Configure a pin as an output, initially low.
    pub fn new(pin: Peri<'static, AnyPin>) -> Self {
        Self {
            pin: Output::new(pin, Level::Low),
        }
    }
}

impl katabat_hal::OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Input line with the internal pull-up enabled.
pub struct RpInput {
    pin: Input<'static>,
}

impl RpInput {
    /// Configure a pin as a pulled-up input. Idle reads high; a pressed
    /// button or closed switch pulls it low.
    pub fn pulled_up(pin: Peri<'static, AnyPin>) -> Self {
        Self {
            pin: Input::new(pin, Pull::Up),
        }
    }
}

impl katabat_hal::InputPin for RpInput {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
