//! Bookmark Landing Page
//!
//! Leptos components for the landing page. The `ssr` feature builds the
//! server side, `hydrate` builds the WASM client that takes over the
//! server-rendered markup.

pub mod app;
pub mod components;
pub mod pages;
pub mod dom;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
