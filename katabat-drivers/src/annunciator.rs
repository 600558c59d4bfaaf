//! Sound and light outputs

use katabat_core::traits::Annunciator;
use katabat_hal::OutputPin;

/// Sound and light lines, switched together.
///
/// Both come up off: a rig that boots mid-pole should not be wailing
/// before homing has run.
pub struct PinAnnunciator<S, L> {
    sound: S,
    light: L,
}

impl<S, L> PinAnnunciator<S, L>
where
    S: OutputPin,
    L: OutputPin,
{
    pub fn new(sound: S, light: L) -> Self {
        let mut annunciator = Self { sound, light };
        annunciator.set_active(false);
        annunciator
    }
}

impl<S, L> Annunciator for PinAnnunciator<S, L>
where
    S: OutputPin,
    L: OutputPin,
{
    fn set_active(&mut self, on: bool) {
        self.sound.set_state(on);
        self.light.set_state(on);
    }
}
