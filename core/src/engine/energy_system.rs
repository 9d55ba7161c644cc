use crate::event::Event;
use crate::log::push_event;
use crate::model::{ENERGY_MAX, ENERGY_REGEN_STEP};
use crate::session::{ActionResult, ActiveSession};

impl ActiveSession {
    pub(crate) fn regen_action(&mut self) -> ActionResult {
        let mut events = Vec::new();
        let changed = self.apply_regen_tick(&mut events);
        ActionResult {
            events,
            changed,
            error: String::new(),
        }
    }

    /// One timer tick. The gate checks the pre-tick value against the
    /// ceiling and the step itself is not clamped, so a tick at 495 lands on
    /// 505; any value at or above the ceiling blocks further ticks.
    pub(crate) fn apply_regen_tick(&mut self, events: &mut Vec<String>) -> bool {
        if self.state.energy >= ENERGY_MAX {
            return false;
        }

        self.state.energy += ENERGY_REGEN_STEP;
        self.regen_ticks = self.regen_ticks.saturating_add(1);

        push_event(
            events,
            Event::EnergyRegenerated {
                energy: self.state.energy,
            },
        );
        true
    }
}
