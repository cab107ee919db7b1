//! Authenticated shell controller.
//!
//! Owns the per-shell state ([`AuthGate`], sidebar, profile menu, theme) and
//! drives the collaborators:
//!
//! - **Gate**: [`ShellController::evaluate`] redirects to the login path,
//!   replacing the current entry and carrying the original location, when
//!   the identity check resolves without a user.
//! - **Theme**: read once in [`ShellController::new`], written on every
//!   [`ShellController::toggle_theme`].
//! - **Sign-out**: logout followed by a full page load of the login path. The
//!   gate issues no further client-side redirects on this controller.

use crate::breadcrumb::{Breadcrumb, breadcrumbs};
use crate::config::ShellConfig;
use crate::gate::{AuthGate, GateState};
use crate::menu::{Disclosure, PointerTarget, ProfileMenu};
use crate::navigation::{LocationState, NavigateOptions, Navigator};
use crate::session::IdentityProvider;
use crate::storage::KeyValueStore;
use crate::theme::{PresentationMode, ThemePreference};

pub struct ShellController<I, N, S> {
    config: ShellConfig,
    identity: I,
    navigator: N,
    store: S,
    gate: AuthGate,
    sidebar: Disclosure,
    profile_menu: ProfileMenu,
    mode: PresentationMode,
    signed_out: bool,
}

impl<I, N, S> ShellController<I, N, S>
where
    I: IdentityProvider,
    N: Navigator,
    S: KeyValueStore,
{
    /// Mount a shell. Reads the persisted theme once.
    pub fn new(config: ShellConfig, identity: I, navigator: N, store: S) -> Self {
        let mode = ThemePreference::new(&config.theme_key).load(&store);
        Self {
            config,
            identity,
            navigator,
            store,
            gate: AuthGate::new(),
            sidebar: Disclosure::default(),
            profile_menu: ProfileMenu::default(),
            mode,
            signed_out: false,
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    /// Re-evaluate the gate against the identity provider.
    ///
    /// Call whenever the user or loading flag may have changed. After
    /// [`sign_out`](Self::sign_out) the page is being reloaded, so no
    /// client-side redirect is issued.
    pub fn evaluate(&mut self) -> GateState {
        let is_loading = self.identity.is_loading();
        let has_user = !is_loading && self.identity.current_user().is_some();
        let transition = self.gate.evaluate(is_loading, has_user);

        if transition.requires_redirect() && !self.signed_out {
            let from = self.navigator.current_path();
            tracing::info!(%from, to = %self.config.login_path, "redirecting to login");
            self.profile_menu.close();
            self.sidebar.close();
            self.navigator.navigate(
                &self.config.login_path,
                NavigateOptions::replace_with(LocationState::from_path(from)),
            );
        }

        transition.to
    }

    /// Breadcrumbs for the navigator's current path.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        breadcrumbs(&self.navigator.current_path(), &self.config)
    }

    /// Client-side navigation from inside the shell. Closes the overlays.
    pub fn navigate(&mut self, path: &str) {
        self.sidebar.close();
        self.profile_menu.close();
        self.navigator.navigate(path, NavigateOptions::push());
    }

    // --- theme ---------------------------------------------------------------

    pub fn presentation_mode(&self) -> PresentationMode {
        self.mode
    }

    /// Flip the theme and persist it. A failed write keeps the new mode.
    pub fn toggle_theme(&mut self) -> PresentationMode {
        self.mode = self.mode.toggled();
        if let Err(err) = ThemePreference::new(&self.config.theme_key).save(&self.store, self.mode)
        {
            tracing::warn!(%err, "failed to persist theme");
        }
        self.mode
    }

    // --- sidebar -------------------------------------------------------------

    pub fn sidebar_open(&self) -> bool {
        self.sidebar.is_open()
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar.open();
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar.close();
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar.toggle()
    }

    // --- profile menu --------------------------------------------------------

    pub fn profile_menu_open(&self) -> bool {
        self.profile_menu.is_open()
    }

    pub fn toggle_profile_menu(&mut self) -> bool {
        self.profile_menu.toggle()
    }

    pub fn close_profile_menu(&mut self) {
        self.profile_menu.close();
    }

    /// Document pointer-down. Returns `true` if the menu was dismissed.
    pub fn pointer_down(&mut self, target: PointerTarget) -> bool {
        self.profile_menu.on_pointer_down(target)
    }

    // --- session -------------------------------------------------------------

    /// Log out and reload at the login path.
    pub fn sign_out(&mut self) {
        tracing::info!("signing out");
        self.signed_out = true;
        self.profile_menu.close();
        self.identity.logout();
        self.navigator.hard_navigate(&self.config.login_path);
    }
}
