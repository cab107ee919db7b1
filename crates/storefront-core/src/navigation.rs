//! Navigation collaborator.

use serde::{Deserialize, Serialize};

/// State carried along with a navigation entry.
///
/// The auth gate stores the originating path in `from` so the login page
/// can send the user back after sign-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl LocationState {
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            from: Some(path.into()),
        }
    }
}

/// Options for [`Navigator::navigate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
    /// State attached to the new entry.
    pub state: Option<LocationState>,
}

impl NavigateOptions {
    /// Push a new entry without state.
    pub fn push() -> Self {
        Self::default()
    }

    /// Replace the current entry, carrying `state`.
    pub fn replace_with(state: LocationState) -> Self {
        Self {
            replace: true,
            state: Some(state),
        }
    }
}

/// Client-side routing facility.
pub trait Navigator {
    /// Current location path (e.g. `/superadmin/orders`).
    fn current_path(&self) -> String;

    /// Client-side navigation.
    fn navigate(&self, path: &str, options: NavigateOptions);

    /// Full page load, discarding in-memory state.
    fn hard_navigate(&self, path: &str);
}
