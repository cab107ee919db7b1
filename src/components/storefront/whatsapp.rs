use leptos::prelude::*;
use leptos_icons::Icon;
use storefront_core::WhatsAppContact;

use super::css;
use crate::components::icons as ic;
use crate::config::{WHATSAPP_MESSAGE, WHATSAPP_NUMBER};

/// Floating chat button. Renders nothing when the configured number has
/// no digits.
#[component]
pub fn WhatsAppButton() -> impl IntoView {
    let href = match WhatsAppContact::new(WHATSAPP_NUMBER, Some(WHATSAPP_MESSAGE)) {
        Ok(contact) => contact.link(|s| String::from(js_sys::encode_uri_component(s))),
        Err(err) => {
            tracing::warn!(%err, "WhatsApp button disabled");
            return None;
        }
    };

    Some(view! {
        <a
            class=css::whatsapp
            href=href
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Chat with us on WhatsApp"
        >
            <Icon icon=ic::WHATSAPP />
        </a>
    })
}
