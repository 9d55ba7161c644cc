use crate::event::Event;

#[cfg(target_arch = "wasm32")]
mod wasm_log {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console)]
        fn log(message: &str);
    }

    pub fn log_line(message: &str) {
        log(message);
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_log::log_line;

#[cfg(not(target_arch = "wasm32"))]
pub fn log_line(message: &str) {
    println!("{message}");
}

/// Serializes an event as a JSON line, mirrors it to the console and appends
/// it to the outgoing batch.
pub fn push_event(lines: &mut Vec<String>, event: Event) {
    let line = event.to_json_line();
    log_line(&line);
    lines.push(line);
}
