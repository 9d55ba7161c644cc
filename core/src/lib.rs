//! Tap-to-earn mini-app core. The session engine and event log are plain
//! Rust, testable natively; the DOM adapter, the regeneration timer and the
//! `Telegram.WebApp` bridge only exist on the wasm32 target.

mod engine;
mod event;
mod log;
mod sim;

pub mod host;
pub mod model;
pub mod session;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod ui;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Replays `taps` tap attempts followed by `regen_ticks` timer ticks
/// headlessly and returns the produced event lines.
#[wasm_bindgen]
pub fn run_scenario(taps: u32, regen_ticks: u32) -> Vec<String> {
    sim::run_scenario_internal(taps, regen_ticks)
}
