mod app;
mod components;
mod config;
mod models;
mod services;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    tracing::info!(app = config::APP_NAME, "mounting");
    mount_to(root, App).forget();
}
