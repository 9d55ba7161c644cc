use crate::event::{host_payload, Event};
use crate::host::HostPlatform;
use crate::log::push_event;
use crate::session::{ActiveSession, Snapshot};

impl ActiveSession {
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            coins: self.state.coins,
            energy: self.state.energy,
            taps_rejected: self.taps_rejected,
            regen_ticks: self.regen_ticks,
        }
    }

    /// Serializes the counters and hands them to the host exactly once.
    pub(crate) fn report(&self, host: &dyn HostPlatform, events: &mut Vec<String>) -> String {
        let payload = host_payload(&self.state);
        host.send_data(&payload);
        push_event(
            events,
            Event::StateReported {
                coins: self.state.coins,
                energy: self.state.energy,
            },
        );
        payload
    }
}
