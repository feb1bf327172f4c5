//! Innova Console - Admin console for the Innova platform
//!
//! A web application for administering the Innova innovation platform:
//! idea review, blog, site content, hero slides and the contact inbox.
//! Built with Leptos and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
