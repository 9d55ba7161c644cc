use wasm_bindgen::prelude::*;

use crate::host::active_host;
use crate::model::GameState;

mod manager;

/// Outcome of one session mutation (a tap attempt or a regeneration tick):
/// the event lines it produced, whether any counter changed, and an error
/// tag for calls against a missing handle.
#[wasm_bindgen(getter_with_clone)]
pub struct ActionResult {
    pub events: Vec<String>,
    pub changed: bool,
    pub error: String,
}

/// Point-in-time copy of the session counters plus run diagnostics.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct Snapshot {
    pub coins: u32,
    pub energy: u32,
    pub taps_rejected: u32,
    pub regen_ticks: u32,
}

/// One live tap session. All transitions run on the thread that created it;
/// handlers run to completion, so the gate checks in `tap_system` and
/// `energy_system` need no locking.
pub(crate) struct ActiveSession {
    pub(crate) state: GameState,
    pub(crate) taps_rejected: u32,
    pub(crate) regen_ticks: u32,
}

impl ActiveSession {
    pub(crate) fn new() -> Self {
        Self {
            state: GameState::new(),
            taps_rejected: 0,
            regen_ticks: 0,
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

#[wasm_bindgen]
pub fn create_session() -> u32 {
    manager::create_session()
}

#[wasm_bindgen]
pub fn destroy_session(handle: u32) {
    manager::destroy_session(handle);
}

#[wasm_bindgen]
pub fn reset_session(handle: u32) -> bool {
    manager::reset_session(handle)
}

/// One user tap. A tap with no energy left changes nothing.
#[wasm_bindgen]
pub fn tap(handle: u32) -> ActionResult {
    manager::with_session_mut(handle, |session| session.tap_action()).unwrap_or_else(|| {
        ActionResult {
            events: Vec::new(),
            changed: false,
            error: format!("invalid_handle:{handle}"),
        }
    })
}

/// One regeneration tick, normally driven by the fixed-period timer.
#[wasm_bindgen]
pub fn regen_tick(handle: u32) -> ActionResult {
    manager::with_session_mut(handle, |session| session.regen_action()).unwrap_or_else(|| {
        ActionResult {
            events: Vec::new(),
            changed: false,
            error: format!("invalid_handle:{handle}"),
        }
    })
}

#[wasm_bindgen]
pub fn get_snapshot(handle: u32) -> Snapshot {
    manager::with_session(handle, |session| session.snapshot()).unwrap_or(Snapshot {
        coins: 0,
        energy: 0,
        taps_rejected: 0,
        regen_ticks: 0,
    })
}

/// Serializes the counters and hands them to the host's outbound data
/// channel once. Returns the payload, or an empty string for a missing
/// handle. Fire-and-forget: no acknowledgment is expected.
#[wasm_bindgen]
pub fn report_state(handle: u32) -> String {
    manager::with_session_mut(handle, |session| {
        let mut events = Vec::new();
        session.report(&active_host(), &mut events)
    })
    .unwrap_or_default()
}
