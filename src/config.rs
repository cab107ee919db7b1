//! Application configuration.
//!
//! Centralizes the constants used throughout the storefront and admin shell.

use storefront_core::ShellConfig;

// =============================================================================
// Application Metadata
// =============================================================================

/// Store name shown in the hero banner and the sidebar.
pub const APP_NAME: &str = "Lumen Market";

/// Tagline under the hero title.
pub const APP_TAGLINE: &str = "Everyday essentials, delivered fast.";

// =============================================================================
// Routing
// =============================================================================

/// Admin namespace root (first path segment of every admin page).
pub const ADMIN_ROOT: &str = "/superadmin";

/// Namespace token as it appears in a path segment.
pub const ADMIN_SEGMENT: &str = "superadmin";

/// Login page path.
pub const LOGIN_PATH: &str = "/login";

// =============================================================================
// Storage Keys
// =============================================================================

/// localStorage key for the dark-mode flag (JSON boolean).
pub const THEME_STORAGE_KEY: &str = "darkMode";

/// localStorage key for the persisted session (JSON user record).
pub const SESSION_STORAGE_KEY: &str = "storefront_session";

// =============================================================================
// Contact
// =============================================================================

/// WhatsApp number for the floating contact button.
pub const WHATSAPP_NUMBER: &str = "+62 812-0000-1234";

/// Message prefilled in the WhatsApp chat.
pub const WHATSAPP_MESSAGE: &str = "Hi! I have a question about my order.";

// =============================================================================
// UI Configuration
// =============================================================================

/// Viewport query above which the sidebar is always visible.
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 1024px)";

/// Icon theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// Feature-highlight cards on the landing page: (icon key, title, body).
pub const FEATURES: &[(&str, &str, &str)] = &[
    (
        "delivery",
        "Same-day delivery",
        "Order before noon and get it at your door the same evening.",
    ),
    (
        "secure",
        "Secure checkout",
        "Payments are processed by certified providers. We never store your card.",
    ),
    (
        "returns",
        "Free returns",
        "Changed your mind? Send it back within 30 days at no cost.",
    ),
    (
        "support",
        "Real people",
        "Our support team answers on WhatsApp every day from 8 to 22.",
    ),
];

// =============================================================================
// Shell Configuration
// =============================================================================

/// Paths and keys handed to the shell controller.
pub fn shell_config() -> ShellConfig {
    ShellConfig {
        root: ADMIN_ROOT.to_string(),
        login_path: LOGIN_PATH.to_string(),
        theme_key: THEME_STORAGE_KEY.to_string(),
        ..ShellConfig::default()
    }
}
