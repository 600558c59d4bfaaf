//! GPIO sensor bank

use katabat_core::edge::SensorSample;
use katabat_core::traits::Sensors;
use katabat_hal::InputPin;

/// The three sensor inputs read as one snapshot.
///
/// Raw line levels pass through untouched: the lines are active-low with
/// pull-ups, and the control logic interprets the polarity. The pins must
/// be configured with their pull-ups enabled.
pub struct PinSensors<T, U, N> {
    trigger: T,
    top_limit: U,
    near_bottom: N,
}

impl<T, U, N> PinSensors<T, U, N>
where
    T: InputPin,
    U: InputPin,
    N: InputPin,
{
    pub fn new(trigger: T, top_limit: U, near_bottom: N) -> Self {
        Self {
            trigger,
            top_limit,
            near_bottom,
        }
    }
}

impl<T, U, N> Sensors for PinSensors<T, U, N>
where
    T: InputPin,
    U: InputPin,
    N: InputPin,
{
    fn sample(&mut self) -> SensorSample {
        SensorSample {
            trigger: self.trigger.is_high(),
            top_limit: self.top_limit.is_high(),
            near_bottom: self.near_bottom.is_high(),
        }
    }
}
