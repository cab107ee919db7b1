//! Target-independent logic for the storefront admin shell.
//!
//! Everything here runs without a browser so it can be tested natively.
//! The web crate supplies browser-backed implementations of the collaborator
//! traits ([`IdentityProvider`], [`Navigator`], [`KeyValueStore`]).
//!
//! - [`breadcrumbs`] - URL path to breadcrumb trail
//! - [`AuthGate`] - loading / unauthenticated / authenticated state machine
//! - [`ShellController`] - orchestrates the gate, menus, theme and sign-out
//! - [`ThemePreference`] - persisted dark-mode flag
//! - [`nav`] - role-gated sidebar catalog
//! - [`contact`] - WhatsApp contact link model

pub mod breadcrumb;
pub mod config;
pub mod contact;
pub mod error;
pub mod gate;
pub mod menu;
pub mod nav;
pub mod navigation;
pub mod session;
pub mod shell;
pub mod storage;
pub mod theme;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use breadcrumb::{Breadcrumb, breadcrumbs, humanize_segment};
pub use config::ShellConfig;
pub use contact::WhatsAppContact;
pub use error::{ContactError, ParseRoleError, StorageError};
pub use gate::{AuthGate, GateState, GateTransition};
pub use menu::{Disclosure, PointerTarget, ProfileMenu, RevealLatch};
pub use nav::{NavItem, Role};
pub use navigation::{LocationState, NavigateOptions, Navigator};
pub use session::IdentityProvider;
pub use shell::ShellController;
pub use storage::KeyValueStore;
pub use theme::{PresentationMode, ThemePreference};
