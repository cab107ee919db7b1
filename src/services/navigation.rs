//! History API navigator.

use leptos::prelude::*;
use storefront_core::{NavigateOptions, Navigator};

use crate::models::AppRoute;
use crate::utils::dom;

/// [`Navigator`] that updates the History API and the route signal.
///
/// `current_path` reads the route signal, so callers inside reactive
/// closures re-run on navigation.
#[derive(Clone, Copy)]
pub struct HistoryNavigator {
    route: RwSignal<AppRoute>,
}

impl HistoryNavigator {
    pub fn new(route: RwSignal<AppRoute>) -> Self {
        Self { route }
    }
}

impl Navigator for HistoryNavigator {
    fn current_path(&self) -> String {
        self.route.with(AppRoute::path)
    }

    fn navigate(&self, path: &str, options: NavigateOptions) {
        let state = options.state.as_ref();
        if options.replace {
            dom::replace_path(path, state);
        } else {
            dom::push_path(path, state);
        }
        tracing::debug!(path, replace = options.replace, "navigate");
        self.route.set(AppRoute::from_path(path));
    }

    fn hard_navigate(&self, path: &str) {
        dom::hard_navigate(path);
    }
}
