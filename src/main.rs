mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    // Route panics to the browser console before anything else runs.
    console_error_panic_hook::set_once();

    let root = document()
        .get_element_by_id("app")
        .expect("index.html must contain a #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    // Leak the mount handle; the app lives for the whole page.
    mount_to(root, App).forget();
}
