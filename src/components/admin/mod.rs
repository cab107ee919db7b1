//! Admin page content rendered inside the shell, plus the not-found page.

use leptos::prelude::*;
use leptos_icons::Icon;
use storefront_core::{humanize_segment, nav};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::ADMIN_ROOT;

stylance::import_crate_style!(css, "src/components/admin/admin.module.css");

/// Page body for the current admin route.
///
/// Section pages share one layout; the title comes from the section's
/// sidebar entry, or the humanized path segment for pages not in the
/// sidebar.
#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let section = Memo::new(move |_| ctx.route.with(|r| r.admin_section().map(str::to_string)));

    move || match section.get() {
        None => view! { <Dashboard /> }.into_any(),
        Some(section) => {
            let path = format!("{ADMIN_ROOT}/{section}");
            let entry = nav::CATALOG.iter().find(|item| item.path == path);
            let title = entry
                .map(|item| item.label.to_string())
                .unwrap_or_else(|| humanize_segment(&section));
            let icon = ic::by_key(entry.map(|item| item.icon).unwrap_or_default());

            view! {
                <section class=css::page>
                    <h1 class=css::title>
                        <Icon icon=icon />
                        {title}
                    </h1>
                    <p class=css::muted>"Nothing here yet."</p>
                </section>
            }
            .into_any()
        }
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let greeting = move || {
        ctx.session
            .user
            .with(|u| u.as_ref().map(|u| format!("Welcome back, {}", u.name)))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <section class=css::page>
            <h1 class=css::title>
                <Icon icon=ic::DASHBOARD />
                {greeting}
            </h1>
            <p class=css::muted>"Pick a section from the sidebar to get started."</p>
        </section>
    }
}

/// Fallback for unknown paths.
#[component]
pub fn NotFound() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let path = move || ctx.route.with(|r| r.path());

    view! {
        <section class=css::notFound>
            <h1>"404"</h1>
            <p>"No page at " <code>{path}</code></p>
            <a href="/">"Back to the store"</a>
        </section>
    }
}
