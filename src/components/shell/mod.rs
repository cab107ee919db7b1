//! Authenticated admin shell.
//!
//! [`AdminShell`] mounts one [`ShellController`] per shell instance and
//! exposes it to the sidebar, header and profile menu through [`ShellHandle`].
//! The controller is the single writer of shell state; the handle mirrors
//! that state into signals after every action so views can react.

mod header;
mod layout;
mod profile_menu;
mod sidebar;

use leptos::prelude::*;
use storefront_core::{Breadcrumb, GateState, PointerTarget, PresentationMode, ShellController};

use crate::services::{HistoryNavigator, LocalStore, SessionContext};

pub use layout::AdminShell;

pub type BrowserShell = ShellController<SessionContext, HistoryNavigator, LocalStore>;

/// Reactive handle to the mounted shell controller.
#[derive(Clone, Copy)]
pub struct ShellHandle {
    controller: StoredValue<BrowserShell>,
    pub gate: RwSignal<GateState>,
    pub sidebar_open: RwSignal<bool>,
    pub menu_open: RwSignal<bool>,
    pub mode: RwSignal<PresentationMode>,
}

impl ShellHandle {
    /// Wrap a freshly mounted controller; `mode` receives its stored theme.
    pub fn new(shell: BrowserShell, mode: RwSignal<PresentationMode>) -> Self {
        mode.set(shell.presentation_mode());
        Self {
            controller: StoredValue::new(shell),
            gate: RwSignal::new(GateState::default()),
            sidebar_open: RwSignal::new(false),
            menu_open: RwSignal::new(false),
            mode,
        }
    }

    /// Run `action` on the controller, then mirror its state.
    fn act<R>(&self, action: impl FnOnce(&mut BrowserShell) -> R) -> Option<R> {
        let handle = *self;
        self.controller.try_update_value(move |shell| {
            let out = action(shell);
            set_if_changed(handle.gate, shell.gate_state());
            set_if_changed(handle.sidebar_open, shell.sidebar_open());
            set_if_changed(handle.menu_open, shell.profile_menu_open());
            set_if_changed(handle.mode, shell.presentation_mode());
            out
        })
    }

    /// Re-run the auth gate. Tracks the identity signals when called from
    /// an effect.
    pub fn evaluate(&self) {
        self.act(|shell| shell.evaluate());
    }

    /// Trail for the current path. Tracks the route signal.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.controller
            .try_with_value(|shell| shell.breadcrumbs())
            .unwrap_or_default()
    }

    pub fn root(&self) -> String {
        self.controller
            .try_with_value(|shell| shell.config().root.clone())
            .unwrap_or_default()
    }

    pub fn navigate(&self, path: &str) {
        self.act(|shell| shell.navigate(path));
    }

    pub fn toggle_sidebar(&self) {
        self.act(|shell| shell.toggle_sidebar());
    }

    pub fn close_sidebar(&self) {
        self.act(|shell| shell.close_sidebar());
    }

    pub fn toggle_menu(&self) {
        self.act(|shell| shell.toggle_profile_menu());
    }

    pub fn close_menu(&self) {
        self.act(|shell| shell.close_profile_menu());
    }

    pub fn pointer_down(&self, target: PointerTarget) {
        self.act(|shell| shell.pointer_down(target));
    }

    pub fn toggle_theme(&self) {
        self.act(|shell| shell.toggle_theme());
    }

    pub fn sign_out(&self) {
        self.act(|shell| shell.sign_out());
    }
}

fn set_if_changed<T>(signal: RwSignal<T>, value: T)
where
    T: PartialEq + Send + Sync + 'static,
{
    if signal.with_untracked(|current| *current != value) {
        signal.set(value);
    }
}
