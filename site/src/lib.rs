//! # site
//!
//! Leptos frontend for the DESDR Open Insurance Toolkit website.
//!
//! All page content lives in the static `catalog`. Pages compose the
//! action primitives and list sections from `components` over that catalog,
//! and `app` wires the pages to routes. The same crate renders on the
//! server (`ssr`) and hydrates in the browser (`hydrate`).

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod routes;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
