use crate::model::GameState;

/// Structured session event emitted from Rust and consumed by the JS shell.
pub enum Event {
    SessionStart {
        energy: u32,
    },
    CoinScored {
        coins: u32,
        energy: u32,
    },
    TapExhausted {
        coins: u32,
    },
    EnergyRegenerated {
        energy: u32,
    },
    StateReported {
        coins: u32,
        energy: u32,
    },
}

impl Event {
    pub fn to_json_line(&self) -> String {
        match self {
            Event::SessionStart { energy } => {
                format!(r#"{{"kind":"SessionStart","energy":{energy}}}"#)
            }
            Event::CoinScored { coins, energy } => {
                format!(r#"{{"kind":"CoinScored","coins":{coins},"energy":{energy}}}"#)
            }
            Event::TapExhausted { coins } => {
                format!(r#"{{"kind":"TapExhausted","coins":{coins}}}"#)
            }
            Event::EnergyRegenerated { energy } => {
                format!(r#"{{"kind":"EnergyRegenerated","energy":{energy}}}"#)
            }
            Event::StateReported { coins, energy } => {
                format!(r#"{{"kind":"StateReported","coins":{coins},"energy":{energy}}}"#)
            }
        }
    }
}

/// Flat payload handed to the host's outbound data channel: a JSON object
/// with exactly the `coins` and `energy` keys, both plain integers.
pub fn host_payload(state: &GameState) -> String {
    format!(r#"{{"coins":{},"energy":{}}}"#, state.coins, state.energy)
}
