//! Admin shell layout and auth gate.

use leptos::prelude::*;
use leptos_use::use_media_query;
use storefront_core::ShellController;

use super::ShellHandle;
use super::header::Header;
use super::sidebar::Sidebar;
use crate::app::AppContext;
use crate::config::{DESKTOP_MEDIA_QUERY, shell_config};
use crate::services::LocalStore;

stylance::import_crate_style!(css, "src/components/shell/shell.module.css");

/// Authenticated admin shell.
///
/// Renders nothing observable until the identity check resolves with a user;
/// an unauthenticated visitor is redirected to the login page by the
/// controller. Children render inside the content area.
#[component]
pub fn AdminShell(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let controller = ShellController::new(shell_config(), ctx.session, ctx.navigator(), LocalStore);
    let shell = ShellHandle::new(controller, ctx.mode);
    provide_context(shell);

    // Re-evaluates whenever the user or loading flag changes
    Effect::new(move || shell.evaluate());

    // Mobile overlay makes no sense once the sidebar is docked
    let is_desktop = use_media_query(DESKTOP_MEDIA_QUERY);
    Effect::new(move || {
        if is_desktop.get() {
            shell.close_sidebar();
        }
    });

    view! {
        <Show
            when=move || shell.gate.get().renders_content()
            fallback=|| view! { <div class=css::pending aria-busy="true"></div> }
        >
            <div class=css::shell data-theme=move || shell.mode.get().as_str()>
                <Sidebar />
                <Show when=move || shell.sidebar_open.get()>
                    <div class=css::overlay on:click=move |_| shell.close_sidebar()></div>
                </Show>
                <div class=css::main>
                    <Header />
                    <main class=css::content>{children()}</main>
                </div>
            </div>
        </Show>
    }
}
