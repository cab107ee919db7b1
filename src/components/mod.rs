//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`shell`] - Authenticated admin shell (sidebar, header, profile menu)
//! - [`admin`] - Admin page content
//! - [`storefront`] - Public landing page (hero, feature cards, WhatsApp)
//! - [`login`] - Sign-in page
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod admin;
pub mod icons;
pub mod login;
pub mod router;
pub mod shell;
pub mod storefront;

pub use router::AppRouter;
