use leptos::prelude::*;

use super::css;
use crate::config::{ADMIN_ROOT, APP_NAME, APP_TAGLINE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class=css::hero>
            <h1 class=css::heroTitle>{APP_NAME}</h1>
            <p class=css::heroTagline>{APP_TAGLINE}</p>
            <a class=css::cta href=ADMIN_ROOT>"Open the backoffice"</a>
        </header>
    }
}
