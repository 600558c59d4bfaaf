//! Status logging over defmt/RTT

use core::time::Duration;

use katabat_core::state::Event;
use katabat_core::traits::StatusSink;

/// Logs phase transitions in the rig's traditional `<seconds> - <phrase>`
/// format.
pub struct DefmtStatus;

impl StatusSink for DefmtStatus {
    fn status(&mut self, at: Duration, event: Event) {
        defmt::info!("{=u64} - {=str}", at.as_secs(), event.label());
    }
}
