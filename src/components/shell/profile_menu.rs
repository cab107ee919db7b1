//! Profile dropdown with outside-click dismissal.
//!
//! A document `pointerdown` listener is attached when the menu mounts and
//! removed when it unmounts, so remounting the shell never stacks handlers.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use web_sys::Node;

use super::ShellHandle;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::{ListenerGuard, dom};

stylance::import_crate_style!(css, "src/components/shell/shell.module.css");

#[component]
pub fn ProfileMenu() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let shell = use_context::<ShellHandle>().expect("ShellHandle must be provided");

    let menu_ref = NodeRef::<leptos::html::Div>::new();
    let trigger_ref = NodeRef::<leptos::html::Button>::new();

    let guard = ListenerGuard::on_document("pointerdown", move |event| {
        let menu = menu_ref.get_untracked().map(|el| el.unchecked_into::<Node>());
        let trigger = trigger_ref
            .get_untracked()
            .map(|el| el.unchecked_into::<Node>());
        let target = dom::classify_pointer(event.target(), menu.as_ref(), trigger.as_ref());
        shell.pointer_down(target);
    });
    let guard = StoredValue::new_local(guard);
    on_cleanup(move || guard.dispose());

    let user = Memo::new(move |_| ctx.session.user.get());
    let initials = move || user.with(|u| u.as_ref().map(|u| u.initials()).unwrap_or_default());

    view! {
        <div class=css::profile>
            <button
                node_ref=trigger_ref
                class=css::profileTrigger
                on:click=move |_| shell.toggle_menu()
                aria-haspopup="menu"
                aria-expanded=move || shell.menu_open.get().to_string()
            >
                <span class=css::avatar>{initials}</span>
                <Icon icon=ic::CHEVRON_DOWN />
            </button>
            <Show when=move || shell.menu_open.get()>
                <div node_ref=menu_ref class=css::profileMenu role="menu">
                    {move || user.get().map(|u| view! {
                        <div class=css::profileInfo>
                            <span class=css::profileName>{u.name}</span>
                            <span class=css::profileEmail>{u.email}</span>
                            <span class=css::profileRole>{u.role.title()}</span>
                        </div>
                    })}
                    <button
                        class=css::menuItem
                        role="menuitem"
                        on:click=move |_| shell.sign_out()
                    >
                        <Icon icon=ic::SIGN_OUT />
                        "Sign out"
                    </button>
                </div>
            </Show>
        </div>
    }
}
