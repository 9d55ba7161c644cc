use std::cell::RefCell;
use std::collections::HashMap;

use super::ActiveSession;

#[derive(Default)]
struct SessionManager {
    next_handle: u32,
    sessions: HashMap<u32, ActiveSession>,
}

impl SessionManager {
    fn create_session(&mut self) -> u32 {
        self.next_handle = self.next_handle.saturating_add(1).max(1);
        let handle = self.next_handle;
        self.sessions.insert(handle, ActiveSession::new());
        handle
    }

    fn destroy_session(&mut self, handle: u32) {
        self.sessions.remove(&handle);
    }

    fn reset_session(&mut self, handle: u32) -> bool {
        if let Some(session) = self.sessions.get_mut(&handle) {
            session.reset();
            true
        } else {
            false
        }
    }
}

thread_local! {
    static MANAGER: RefCell<SessionManager> = RefCell::new(SessionManager::default());
}

pub(super) fn create_session() -> u32 {
    MANAGER.with(|manager| manager.borrow_mut().create_session())
}

pub(super) fn destroy_session(handle: u32) {
    MANAGER.with(|manager| manager.borrow_mut().destroy_session(handle));
}

pub(super) fn reset_session(handle: u32) -> bool {
    MANAGER.with(|manager| manager.borrow_mut().reset_session(handle))
}

pub(super) fn with_session_mut<T>(handle: u32, f: impl FnOnce(&mut ActiveSession) -> T) -> Option<T> {
    MANAGER.with(|manager| {
        let mut manager = manager.borrow_mut();
        manager.sessions.get_mut(&handle).map(f)
    })
}

pub(super) fn with_session<T>(handle: u32, f: impl FnOnce(&ActiveSession) -> T) -> Option<T> {
    MANAGER.with(|manager| {
        let manager = manager.borrow();
        manager.sessions.get(&handle).map(f)
    })
}
