//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use serde::Serialize;
use serde::de::DeserializeOwned;
use storefront_core::{PointerTarget, PresentationMode};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, EventTarget, Node, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Get the `<html>` element.
#[inline]
pub fn document_element() -> Option<Element> {
    window()?.document()?.document_element()
}

// =============================================================================
// Presentation
// =============================================================================

/// Mirror the presentation mode onto `<html>`.
///
/// Sets `data-theme` and toggles the `dark` class so global style rules
/// (page background, scrollbars) follow the shell.
pub fn apply_presentation_mode(mode: PresentationMode) {
    let Some(root) = document_element() else {
        return;
    };
    let _ = root.set_attribute("data-theme", mode.as_str());
    let _ = root.class_list().toggle_with_force("dark", mode.is_dark());
}

// =============================================================================
// Pointer Hit Testing
// =============================================================================

/// Classify a pointer event target relative to a menu and its trigger.
///
/// Non-node targets and nodes detached from the document are reported as
/// [`PointerTarget::Detached`].
pub fn classify_pointer(
    target: Option<EventTarget>,
    menu: Option<&Node>,
    trigger: Option<&Node>,
) -> PointerTarget {
    let Some(node) = target.and_then(|t| t.dyn_into::<Node>().ok()) else {
        return PointerTarget::Detached;
    };
    if !node.is_connected() {
        return PointerTarget::Detached;
    }

    if menu.is_some_and(|m| m.contains(Some(&node))) {
        PointerTarget::Menu
    } else if trigger.is_some_and(|t| t.contains(Some(&node))) {
        PointerTarget::Trigger
    } else {
        PointerTarget::Outside
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Current `location.pathname`.
pub fn pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Push a history entry with serialized `state`.
pub fn push_path<T: Serialize>(path: &str, state: Option<&T>) {
    update_history(path, state, false);
}

/// Replace the current history entry (no new back-button step).
pub fn replace_path<T: Serialize>(path: &str, state: Option<&T>) {
    update_history(path, state, true);
}

fn update_history<T: Serialize>(path: &str, state: Option<&T>, replace: bool) {
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        return;
    };

    let state = state
        .and_then(|s| serde_wasm_bindgen::to_value(s).ok())
        .unwrap_or(JsValue::NULL);

    let result = if replace {
        history.replace_state_with_url(&state, "", Some(path))
    } else {
        history.push_state_with_url(&state, "", Some(path))
    };
    if let Err(err) = result {
        tracing::warn!(path, ?err, "history update failed");
    }
}

/// Deserialize the state attached to the current history entry.
pub fn history_state<T: DeserializeOwned>() -> Option<T> {
    let state = window()?.history().ok()?.state().ok()?;
    if state.is_null() || state.is_undefined() {
        return None;
    }
    serde_wasm_bindgen::from_value(state).ok()
}

/// Full page load of `path`, discarding all in-memory state.
pub fn hard_navigate(path: &str) {
    if let Some(window) = window()
        && let Err(err) = window.location().set_href(path)
    {
        tracing::warn!(path, ?err, "hard navigation failed");
    }
}
