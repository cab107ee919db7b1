//! Sidebar navigation, filtered by the signed-in user's role.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use storefront_core::{NavItem, nav};

use super::ShellHandle;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/shell/shell.module.css");

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let shell = use_context::<ShellHandle>().expect("ShellHandle must be provided");

    let items = Memo::new(move |_| {
        ctx.session
            .user
            .with(|user| match user {
                Some(user) => nav::visible_items(user.role).copied().collect::<Vec<_>>(),
                None => Vec::new(),
            })
    });

    let class = move || {
        if shell.sidebar_open.get() {
            format!("{} {}", css::sidebar, css::sidebarOpen)
        } else {
            css::sidebar.to_string()
        }
    };

    view! {
        <aside class=class>
            <div class=css::brand>
                <span class=css::brandName>{APP_NAME}</span>
                <button
                    class=format!("{} {}", css::iconButton, css::mobileOnly)
                    on:click=move |_| shell.close_sidebar()
                    title="Close navigation"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
            <nav class=css::nav>
                <For
                    each=move || items.get()
                    key=|item| item.path
                    children=move |item| view! { <NavLink item=item /> }
                />
            </nav>
        </aside>
    }
}

#[component]
fn NavLink(item: NavItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let shell = use_context::<ShellHandle>().expect("ShellHandle must be provided");

    let root = shell.root();
    let is_active = Memo::new(move |_| ctx.route.with(|r| item.is_active(&r.path(), &root)));

    let on_click = move |ev: MouseEvent| {
        // Let the browser handle new-tab / new-window clicks
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        shell.navigate(item.path);
    };

    view! {
        <a
            href=item.path
            class=move || {
                if is_active.get() {
                    format!("{} {}", css::navItem, css::navItemActive)
                } else {
                    css::navItem.to_string()
                }
            }
            aria-current=move || is_active.get().then_some("page")
            on:click=on_click
        >
            <span class=css::navIcon><Icon icon=ic::by_key(item.icon) /></span>
            <span>{item.label}</span>
        </a>
    }
}
