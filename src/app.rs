//! Root application module.
//!
//! Contains the main App component and the AppContext shared by every page.

use leptos::prelude::*;
use storefront_core::PresentationMode;

use crate::components::AppRouter;
use crate::models::AppRoute;
use crate::services::{HistoryNavigator, SessionContext};
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`.
///
/// - **Route**: current location, source of truth for rendering
/// - **Session**: identity provider consumed by the admin shell
/// - **Mode**: presentation mode, owned by the mounted shell and mirrored
///   onto `<html>` for global style rules
#[derive(Clone, Copy)]
pub struct AppContext {
    pub route: RwSignal<AppRoute>,
    pub session: SessionContext,
    pub mode: RwSignal<PresentationMode>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(AppRoute::current()),
            session: SessionContext::new(),
            mode: RwSignal::new(PresentationMode::default()),
        }
    }

    /// Navigator bound to this context's route signal.
    pub fn navigator(&self) -> HistoryNavigator {
        HistoryNavigator::new(self.route)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts restoring the persisted session
/// - Mirrors the presentation mode onto the document
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.session.restore();

    Effect::new(move || dom::apply_presentation_mode(ctx.mode.get()));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="fatal">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = dom::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
