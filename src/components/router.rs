//! Application router component.
//!
//! Handles URL-based routing on the History API using native `popstate`
//! events instead of a router crate.
//!
//! # Architecture
//!
//! - **Location path is the source of truth**: the route signal is derived from
//!   `location.pathname`
//! - **Layouts switch on area only**: the admin shell stays mounted while
//!   navigating between admin pages
//! - **popstate events**: browser back/forward buttons work automatically

use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::admin::{AdminPage, NotFound};
use crate::components::login::LoginPage;
use crate::components::shell::AdminShell;
use crate::components::storefront::Storefront;
use crate::models::{AppRoute, RouteArea};
use crate::utils::dom;

/// Main application router.
///
/// - `/` → Storefront landing page
/// - `/login` → Sign-in page
/// - `/superadmin/...` → Admin shell
/// - anything else → Not found
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route = ctx.route;

    // Set up popstate listener (runs once on mount)
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let area = Memo::new(move |_| route.with(AppRoute::area));

    move || match area.get() {
        RouteArea::Storefront => view! { <Storefront /> }.into_any(),
        RouteArea::Login => view! { <LoginPage /> }.into_any(),
        RouteArea::Admin => view! {
            <AdminShell>
                <AdminPage />
            </AdminShell>
        }
        .into_any(),
        RouteArea::NotFound => view! { <NotFound /> }.into_any(),
    }
}
