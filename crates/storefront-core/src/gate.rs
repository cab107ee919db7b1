//! Authentication gate state machine.
//!
//! ```text
//!            user present
//! Loading ─────────────────▶ Authenticated
//!    │                            ▲  │
//!    │ no user                    │  │ logout / expiry
//!    ▼                            │  ▼
//! Unauthenticated ◀───────────────┴──
//! ```
//!
//! The gate re-evaluates on every identity change and reports whether the
//! caller has to redirect. A redirect is requested once per entry into
//! [`GateState::Unauthenticated`], never while staying there.

/// Gate state for one mounted shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Loading,
    Unauthenticated,
    Authenticated,
}

impl GateState {
    /// Resolve the state from raw identity inputs.
    pub fn resolve(is_loading: bool, has_user: bool) -> Self {
        match (is_loading, has_user) {
            (true, _) => Self::Loading,
            (false, true) => Self::Authenticated,
            (false, false) => Self::Unauthenticated,
        }
    }

    /// Protected content may only render here.
    pub fn renders_content(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Result of feeding new inputs into the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateTransition {
    pub from: GateState,
    pub to: GateState,
}

impl GateTransition {
    /// `true` when the gate just entered the unauthenticated state.
    pub fn requires_redirect(&self) -> bool {
        self.to == GateState::Unauthenticated && self.from != GateState::Unauthenticated
    }

    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Tracks the gate state across evaluations.
#[derive(Debug, Clone, Default)]
pub struct AuthGate {
    state: GateState,
}

impl AuthGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Feed the latest identity inputs.
    pub fn evaluate(&mut self, is_loading: bool, has_user: bool) -> GateTransition {
        let from = self.state;
        let to = GateState::resolve(is_loading, has_user);
        self.state = to;

        let transition = GateTransition { from, to };
        if transition.changed() {
            tracing::debug!(?from, ?to, "auth gate transition");
        }
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(GateState::resolve(true, false), GateState::Loading);
        assert_eq!(GateState::resolve(true, true), GateState::Loading);
        assert_eq!(GateState::resolve(false, true), GateState::Authenticated);
        assert_eq!(GateState::resolve(false, false), GateState::Unauthenticated);
    }

    #[test]
    fn test_initial_state_is_loading() {
        let gate = AuthGate::new();
        assert_eq!(gate.state(), GateState::Loading);
        assert!(!gate.state().renders_content());
    }

    #[test]
    fn test_loading_never_redirects() {
        let mut gate = AuthGate::new();
        assert!(!gate.evaluate(true, false).requires_redirect());
        assert!(!gate.evaluate(true, true).requires_redirect());
    }

    #[test]
    fn test_redirect_once_per_entry() {
        let mut gate = AuthGate::new();
        assert!(gate.evaluate(false, false).requires_redirect());
        assert!(!gate.evaluate(false, false).requires_redirect());

        // Sign in, then out again: a fresh entry redirects again
        assert!(!gate.evaluate(false, true).requires_redirect());
        assert!(gate.evaluate(false, false).requires_redirect());
    }

    #[test]
    fn test_authenticated_renders_content() {
        let mut gate = AuthGate::new();
        let t = gate.evaluate(false, true);
        assert_eq!(t.from, GateState::Loading);
        assert_eq!(t.to, GateState::Authenticated);
        assert!(t.changed());
        assert!(gate.state().renders_content());
        assert!(!gate.evaluate(false, true).changed());
    }
}
