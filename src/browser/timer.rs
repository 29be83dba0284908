//! [`Scheduler`] on `setTimeout` via `gloo-timers`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Window;

use super::Relay;
use crate::scheduler::{Scheduler, TimerToken};

pub struct BrowserScheduler {
    window: Window,
    /// Browser timeout handles for tokens that have not fired yet.
    handles: Rc<RefCell<HashMap<TimerToken, i32>>>,
    fire: Relay<TimerToken, ()>,
}

impl BrowserScheduler {
    #[must_use]
    pub fn new(window: Window, fire: Relay<TimerToken, ()>) -> Self {
        Self { window, handles: Rc::new(RefCell::new(HashMap::new())), fire }
    }
}

impl Scheduler for BrowserScheduler {
    #[allow(clippy::cast_possible_truncation)]
    fn schedule(&mut self, token: TimerToken, delay_ms: u32) {
        let handles = Rc::clone(&self.handles);
        let fire = self.fire.clone();
        let timeout = Timeout::new(delay_ms, move || {
            // Drop the handle before firing so a reschedule from inside the
            // callback is not clobbered.
            handles.borrow_mut().remove(&token);
            fire.call(token);
        });
        let handle = timeout.forget();
        match handle.as_f64() {
            Some(raw) => {
                self.handles.borrow_mut().insert(token, raw as i32);
            }
            None => log::debug!("sidebar: timeout {} has no numeric handle", token.get()),
        }
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some(handle) = self.handles.borrow_mut().remove(&token) {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}
