//! Path-based routing on top of the History API.
//!
//! URL format:
//! - `/` → storefront landing page
//! - `/login` → sign-in page
//! - `/superadmin/...` → admin shell
//! - anything else → not found

use crate::config::{ADMIN_ROOT, ADMIN_SEGMENT, LOGIN_PATH};
use crate::utils::dom;

/// Application routes derived from `location.pathname`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Public landing page: `/`
    Storefront,
    /// Sign-in page: `/login`
    Login,
    /// Admin page: `/superadmin/...` (normalized, no trailing slash)
    Admin { path: String },
    /// Unknown path (kept for display)
    NotFound { path: String },
}

/// Top-level area of a route.
///
/// The router switches layouts on this value only, so the admin shell stays
/// mounted while navigating between admin pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteArea {
    Storefront,
    Login,
    Admin,
    NotFound,
}

impl AppRoute {
    /// Parse a location path.
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.first() {
            None => Self::Storefront,
            Some(&"login") if segments.len() == 1 => Self::Login,
            Some(&first) if first == ADMIN_SEGMENT => Self::Admin {
                path: format!("/{}", segments.join("/")),
            },
            Some(_) => Self::NotFound {
                path: format!("/{}", segments.join("/")),
            },
        }
    }

    /// Canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Self::Storefront => "/".to_string(),
            Self::Login => LOGIN_PATH.to_string(),
            Self::Admin { path } | Self::NotFound { path } => path.clone(),
        }
    }

    pub fn area(&self) -> RouteArea {
        match self {
            Self::Storefront => RouteArea::Storefront,
            Self::Login => RouteArea::Login,
            Self::Admin { .. } => RouteArea::Admin,
            Self::NotFound { .. } => RouteArea::NotFound,
        }
    }

    /// Admin page section (`orders` in `/superadmin/orders/42`).
    pub fn admin_section(&self) -> Option<&str> {
        match self {
            Self::Admin { path } => path.split('/').filter(|s| !s.is_empty()).nth(1),
            _ => None,
        }
    }

    /// Get current route from the browser location.
    pub fn current() -> Self {
        Self::from_path(&dom::pathname())
    }
}

/// Validate a post-login return path taken from history state.
///
/// Only same-origin admin paths are accepted; protocol-relative (`//host`)
/// and absolute URLs fall back to the admin root.
pub fn safe_return_path(from: Option<&str>) -> String {
    match from.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && matches!(AppRoute::from_path(path), AppRoute::Admin { .. }) =>
        {
            path.to_string()
        }
        _ => ADMIN_ROOT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_path(""), AppRoute::Storefront);
        assert_eq!(AppRoute::from_path("/"), AppRoute::Storefront);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login/"), AppRoute::Login);
        assert_eq!(
            AppRoute::from_path("/superadmin"),
            AppRoute::Admin {
                path: "/superadmin".to_string()
            }
        );
        assert_eq!(
            AppRoute::from_path("/superadmin//roles/edit/"),
            AppRoute::Admin {
                path: "/superadmin/roles/edit".to_string()
            }
        );
        assert_eq!(
            AppRoute::from_path("/login/extra"),
            AppRoute::NotFound {
                path: "/login/extra".to_string()
            }
        );
        assert_eq!(
            AppRoute::from_path("/cart"),
            AppRoute::NotFound {
                path: "/cart".to_string()
            }
        );
    }

    #[test]
    fn test_route_path() {
        assert_eq!(AppRoute::Storefront.path(), "/");
        assert_eq!(AppRoute::Login.path(), "/login");
        assert_eq!(AppRoute::from_path("/superadmin/orders/").path(), "/superadmin/orders");
    }

    #[test]
    fn test_area_is_stable_within_admin() {
        let a = AppRoute::from_path("/superadmin");
        let b = AppRoute::from_path("/superadmin/products");
        assert_ne!(a, b);
        assert_eq!(a.area(), b.area());
        assert_eq!(a.area(), RouteArea::Admin);
    }

    #[test]
    fn test_admin_section() {
        assert_eq!(AppRoute::from_path("/superadmin").admin_section(), None);
        assert_eq!(
            AppRoute::from_path("/superadmin/orders/42").admin_section(),
            Some("orders")
        );
        assert_eq!(AppRoute::Login.admin_section(), None);
    }

    #[test]
    fn test_safe_return_path() {
        assert_eq!(safe_return_path(Some("/superadmin/roles")), "/superadmin/roles");
        assert_eq!(safe_return_path(None), "/superadmin");
        assert_eq!(safe_return_path(Some("")), "/superadmin");
        assert_eq!(safe_return_path(Some("//evil.example")), "/superadmin");
        assert_eq!(safe_return_path(Some("https://evil.example")), "/superadmin");
        assert_eq!(safe_return_path(Some("/login")), "/superadmin");
        assert_eq!(safe_return_path(Some("/\\evil.example")), "/superadmin");
    }
}
