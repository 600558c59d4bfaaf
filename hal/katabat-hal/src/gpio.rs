//! GPIO pin abstractions
//!
//! Traits for the digital lines of the rider rig. Implementations handle
//! the actual register manipulation for the specific chip; polarity is NOT
//! handled here - the sensor lines are active-low (pull-up idle high) and
//! the control logic interprets the raw levels itself.

/// Digital output pin (brake, clutch, motor, sound, light lines)
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check the level the pin is currently driven to
    fn is_set_high(&self) -> bool;
}

/// Digital input pin (trigger, top-limit, near-bottom sensor lines)
///
/// Implementations for the sensor lines must enable the internal pull-up,
/// so that an unwired or idle sensor reads high.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }

    fn is_set_high(&self) -> bool {
        (**self).is_set_high()
    }
}

impl<T: InputPin + ?Sized> InputPin for &T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}

impl<T: InputPin + ?Sized> InputPin for &mut T {
    fn is_high(&self) -> bool {
        (**self).is_high()
    }
}
