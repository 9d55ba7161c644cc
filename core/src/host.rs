//! The mini-app host as an injected collaborator, so the session core never
//! touches the `Telegram.WebApp` global directly.

/// Capabilities the session core needs from the hosting platform.
pub trait HostPlatform {
    /// Signals that the mini-app finished initializing and can be shown.
    /// No return value is consumed.
    fn ready(&self);

    /// Hands one textual payload to the host's outbound data channel.
    /// Fire-and-forget; failures surface to the hosting environment.
    fn send_data(&self, payload: &str);
}

#[cfg(target_arch = "wasm32")]
mod telegram {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = ["Telegram", "WebApp"])]
        fn ready();

        #[wasm_bindgen(js_namespace = ["Telegram", "WebApp"], js_name = sendData)]
        fn send_data(data: &str);

        #[wasm_bindgen(js_namespace = ["Telegram", "WebApp"], js_name = onEvent)]
        fn on_event(event_type: &str, callback: &js_sys::Function);
    }

    /// Host bridge backed by the `Telegram.WebApp` global.
    pub struct TelegramHost;

    impl super::HostPlatform for TelegramHost {
        fn ready(&self) {
            ready();
        }

        fn send_data(&self, payload: &str) {
            send_data(payload);
        }
    }

    impl TelegramHost {
        /// Registers `callback` for a named host lifecycle event.
        pub fn subscribe(event_type: &str, callback: &js_sys::Function) {
            on_event(event_type, callback);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use telegram::TelegramHost;

/// Host used on native targets (tests and headless sims): accepts every
/// call and discards it.
pub struct NullHost;

impl HostPlatform for NullHost {
    fn ready(&self) {}

    fn send_data(&self, _payload: &str) {}
}

#[cfg(target_arch = "wasm32")]
pub fn active_host() -> TelegramHost {
    TelegramHost
}

#[cfg(not(target_arch = "wasm32"))]
pub fn active_host() -> NullHost {
    NullHost
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;

    use super::HostPlatform;

    /// Captures outbound traffic for assertions.
    #[derive(Default)]
    pub(crate) struct RecordingHost {
        pub(crate) ready_calls: RefCell<u32>,
        pub(crate) sent: RefCell<Vec<String>>,
    }

    impl HostPlatform for RecordingHost {
        fn ready(&self) {
            *self.ready_calls.borrow_mut() += 1;
        }

        fn send_data(&self, payload: &str) {
            self.sent.borrow_mut().push(payload.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingHost;
    use super::HostPlatform;

    #[test]
    fn recording_host_captures_both_capabilities() {
        let host = RecordingHost::default();
        host.ready();
        host.send_data(r#"{"coins":0,"energy":500}"#);

        assert_eq!(*host.ready_calls.borrow(), 1);
        assert_eq!(host.sent.borrow().len(), 1);
    }
}
