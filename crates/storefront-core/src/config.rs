//! Shell configuration shared by the controller and the translator.

/// Default admin namespace root.
pub const DEFAULT_ROOT: &str = "/superadmin";

/// Default login destination.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Default label of the first breadcrumb.
pub const DEFAULT_HOME_LABEL: &str = "Home";

/// Default storage key for the dark-mode flag.
pub const DEFAULT_THEME_KEY: &str = "darkMode";

/// Paths and keys the shell needs from its host.
///
/// The breadcrumb skip rule assumes the root namespace token is the first
/// path segment; `root` only changes where the Home crumb points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Root path of the admin namespace (target of the Home crumb).
    pub root: String,
    /// Where unauthenticated visitors and signed-out users are sent.
    pub login_path: String,
    /// Label of the Home crumb.
    pub home_label: String,
    /// Storage key for the persisted dark-mode flag.
    pub theme_key: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            home_label: DEFAULT_HOME_LABEL.to_string(),
            theme_key: DEFAULT_THEME_KEY.to_string(),
        }
    }
}
