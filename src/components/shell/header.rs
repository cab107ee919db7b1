//! Shell header: sidebar toggle, breadcrumbs, theme toggle, profile menu.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use storefront_core::Breadcrumb;

use super::ShellHandle;
use super::profile_menu::ProfileMenu;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/shell/shell.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let shell = use_context::<ShellHandle>().expect("ShellHandle must be provided");

    view! {
        <header class=css::header>
            <button
                class=format!("{} {}", css::iconButton, css::mobileOnly)
                on:click=move |_| shell.toggle_sidebar()
                title="Open navigation"
            >
                <Icon icon=ic::MENU />
            </button>

            <Breadcrumbs />

            <div class=css::headerActions>
                <ThemeToggle />
                <ProfileMenu />
            </div>
        </header>
    }
}

/// Breadcrumb trail for the current path; the last crumb is not a link.
#[component]
fn Breadcrumbs() -> impl IntoView {
    let shell = use_context::<ShellHandle>().expect("ShellHandle must be provided");

    // Recomputed on every navigation
    let crumbs = Memo::new(move |_| shell.breadcrumbs());

    view! {
        <nav class=css::breadcrumbs aria-label="Breadcrumb">
            {move || {
                let crumbs = crumbs.get();
                let last = crumbs.len().saturating_sub(1);
                crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(idx, crumb)| view! {
                        <>
                            {(idx > 0).then(|| view! {
                                <span class=css::separator>
                                    <Icon icon=ic::CHEVRON_RIGHT />
                                </span>
                            })}
                            {if idx == last {
                                view! { <CrumbCurrent crumb=crumb /> }.into_any()
                            } else {
                                view! { <CrumbLink crumb=crumb /> }.into_any()
                            }}
                        </>
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[component]
fn CrumbLink(crumb: Breadcrumb) -> impl IntoView {
    let shell = use_context::<ShellHandle>().expect("ShellHandle must be provided");
    let target = crumb.path.clone();

    view! {
        <a
            class=css::crumb
            href=crumb.path
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                shell.navigate(&target);
            }
        >
            {crumb.label}
        </a>
    }
}

#[component]
fn CrumbCurrent(crumb: Breadcrumb) -> impl IntoView {
    view! {
        <span class=format!("{} {}", css::crumb, css::crumbCurrent) aria-current="page">
            {crumb.label}
        </span>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let shell = use_context::<ShellHandle>().expect("ShellHandle must be provided");
    let is_dark = Signal::derive(move || shell.mode.get().is_dark());

    view! {
        <button
            class=css::iconButton
            on:click=move |_| shell.toggle_theme()
            title=move || if is_dark.get() { "Switch to light mode" } else { "Switch to dark mode" }
            aria-pressed=move || is_dark.get().to_string()
        >
            {move || if is_dark.get() {
                view! { <Icon icon=ic::SUN /> }.into_any()
            } else {
                view! { <Icon icon=ic::MOON /> }.into_any()
            }}
        </button>
    }
}
