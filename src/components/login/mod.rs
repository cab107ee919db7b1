//! Sign-in page.
//!
//! The shell's auth gate sends visitors here with `{ from }` in the history
//! state. Once a user is present (fresh sign-in or a restored session) the
//! page replaces itself with that location, so back-navigation does not
//! return to the form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use storefront_core::{LocationState, NavigateOptions, Navigator, Role};

use crate::app::AppContext;
use crate::config::APP_NAME;
use crate::models::{User, safe_return_path};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/login/login.module.css");

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let navigator = ctx.navigator();

    // Read once: the entry's state is replaced when we leave
    let return_to = safe_return_path(
        dom::history_state::<LocationState>()
            .and_then(|s| s.from)
            .as_deref(),
    );

    Effect::new(move || {
        let ready = !ctx.session.loading.get() && ctx.session.user.with(Option::is_some);
        if ready {
            navigator.navigate(&return_to, NavigateOptions::replace_with(LocationState::default()));
        }
    });

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Staff.to_string());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let name_value = name.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        if name_value.is_empty() || !email_value.contains('@') {
            error.set(Some("Enter your name and a valid email.".to_string()));
            return;
        }

        match role.get_untracked().parse::<Role>() {
            Ok(role) => {
                error.set(None);
                ctx.session.sign_in(User {
                    name: name_value,
                    email: email_value,
                    role,
                });
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    view! {
        <main class=css::page>
            <form class=css::card on:submit=on_submit>
                <h1 class=css::title>{APP_NAME} " admin"</h1>
                <p class=css::subtitle>"Sign in to continue"</p>

                <label class=css::field>
                    <span>"Name"</span>
                    <input
                        type="text"
                        autocomplete="name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>

                <label class=css::field>
                    <span>"Email"</span>
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class=css::field>
                    <span>"Role"</span>
                    <select
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.as_str()>{r.title()}</option> })
                            .collect_view()}
                    </select>
                </label>

                {move || error.get().map(|msg| view! { <p class=css::error role="alert">{msg}</p> })}

                <button class=css::submit type="submit">"Sign in"</button>
                <a class=css::back href="/">"Back to the store"</a>
            </form>
        </main>
    }
}
