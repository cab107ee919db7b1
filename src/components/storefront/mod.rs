//! Public landing page.
//!
//! - [`hero`] - Title banner with the call to action
//! - [`features`] - Feature cards revealed on first scroll into view
//! - [`whatsapp`] - Floating WhatsApp contact button

mod features;
mod hero;
mod whatsapp;

use leptos::prelude::*;

use features::FeatureCards;
use hero::Hero;
use whatsapp::WhatsAppButton;

stylance::import_crate_style!(css, "src/components/storefront/storefront.module.css");

#[component]
pub fn Storefront() -> impl IntoView {
    view! {
        <main class=css::page>
            <Hero />
            <FeatureCards />
            <WhatsAppButton />
        </main>
    }
}
