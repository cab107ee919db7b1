//! Data models and types for the application.
//!
//! - [`AppRoute`], [`RouteArea`] - Path-based navigation
//! - [`User`] - Signed-in backoffice user

mod route;
mod user;

pub use route::{AppRoute, RouteArea, safe_return_path};
pub use user::User;
