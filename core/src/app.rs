//! Browser bootstrap: wires the tap graphic, the regeneration timer and the
//! host lifecycle to one session handle.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::host::{HostPlatform, TelegramHost};
use crate::log::log_line;
use crate::model::REGEN_INTERVAL_MS;
use crate::session;
use crate::ui::DomDisplay;

struct AppRuntime {
    interval_id: i32,
    _tap_closure: Closure<dyn FnMut()>,
    _regen_closure: Closure<dyn FnMut()>,
    _viewport_closure: Closure<dyn FnMut()>,
}

thread_local! {
    static RUNTIME: RefCell<Option<AppRuntime>> = RefCell::new(None);
}

/// Boots the mini-app: resolves the display nodes, registers the click and
/// `viewportChanged` handlers, starts the regeneration interval and signals
/// readiness to the host. Call once after the page markup exists.
#[wasm_bindgen]
pub fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let handle = session::create_session();
    let display = DomDisplay::new(&document)?;
    display.render(&session::get_snapshot(handle));

    let tap_target = document
        .get_element_by_id("tap")
        .ok_or_else(|| JsValue::from_str("missing #tap element"))?;
    let tap_display = display.clone();
    let tap_closure = Closure::<dyn FnMut()>::new(move || {
        session::tap(handle);
        tap_display.render(&session::get_snapshot(handle));
    });
    tap_target
        .add_event_listener_with_callback("click", tap_closure.as_ref().unchecked_ref())?;

    let regen_display = display;
    let regen_closure = Closure::<dyn FnMut()>::new(move || {
        session::regen_tick(handle);
        regen_display.render(&session::get_snapshot(handle));
    });
    let interval_id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        regen_closure.as_ref().unchecked_ref(),
        REGEN_INTERVAL_MS,
    )?;

    let viewport_closure = Closure::<dyn FnMut()>::new(move || {
        session::report_state(handle);
    });
    TelegramHost::subscribe("viewportChanged", viewport_closure.as_ref().unchecked_ref());

    TelegramHost.ready();
    log_line("[app:start] session ready");

    RUNTIME.with(|runtime| {
        *runtime.borrow_mut() = Some(AppRuntime {
            interval_id,
            _tap_closure: tap_closure,
            _regen_closure: regen_closure,
            _viewport_closure: viewport_closure,
        });
    });

    Ok(())
}

/// Cancels the regeneration interval and drops the registered closures.
/// Optional teardown; the reference shell simply unloads the page.
#[wasm_bindgen]
pub fn stop_app() {
    let Some(runtime) = RUNTIME.with(|runtime| runtime.borrow_mut().take()) else {
        return;
    };
    if let Some(window) = web_sys::window() {
        window.clear_interval_with_handle(runtime.interval_id);
    }
    log_line("[app:stop] interval cleared");
}
