//! Scoped DOM event subscriptions.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Event, EventTarget};

use crate::utils::dom;

/// A registered event listener, removed again on drop.
///
/// Store it with the owning component (e.g. `StoredValue::new_local`) so the
/// listener lives exactly as long as the component.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
    /// Register `handler` for `event` on `target`.
    ///
    /// Returns `None` if the browser rejected the registration.
    pub fn new(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        tracing::debug!(event, "listener attached");

        Some(Self {
            target,
            event,
            closure,
        })
    }

    /// Register `handler` on the document.
    pub fn on_document(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let document = dom::window()?.document()?;
        Self::new(document.into(), event, handler)
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        tracing::debug!(event = self.event, "listener detached");
    }
}
