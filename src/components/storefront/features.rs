use leptos::html::Article;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_element_visibility;
use storefront_core::RevealLatch;

use super::css;
use crate::components::icons as ic;
use crate::config::FEATURES;

#[component]
pub fn FeatureCards() -> impl IntoView {
    view! {
        <section class=css::features>
            {FEATURES
                .iter()
                .map(|&(icon, title, body)| view! { <FeatureCard icon=icon title=title body=body /> })
                .collect_view()}
        </section>
    }
}

/// One card. Fades in the first time it enters the viewport and stays
/// visible after that, even when scrolled away again.
#[component]
fn FeatureCard(icon: &'static str, title: &'static str, body: &'static str) -> impl IntoView {
    let card = NodeRef::<Article>::new();
    let visible = use_element_visibility(card);
    let latch = StoredValue::new(RevealLatch::default());

    let revealed = Memo::new(move |_| {
        let seen = visible.get();
        latch
            .try_update_value(|l| l.observe(seen))
            .unwrap_or(seen)
    });

    let class = move || {
        if revealed.get() {
            format!("{} {}", css::card, css::cardRevealed)
        } else {
            css::card.to_string()
        }
    };

    view! {
        <article node_ref=card class=class>
            <span class=css::cardIcon>
                <Icon icon=ic::by_key(icon) />
            </span>
            <h2 class=css::cardTitle>{title}</h2>
            <p class=css::cardBody>{body}</p>
        </article>
    }
}
