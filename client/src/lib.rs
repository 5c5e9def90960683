//! # client
//!
//! Leptos + WASM frontend for the MAFFA artist site.
//!
//! The page is rendered on the server (`ssr`) and hydrated in the browser
//! (`hydrate`). Only the hydrated side talks to the backend: the gig feed is
//! loaded once on activation, and the contact form posts on submit. The
//! request/response shapes and the state machines behind both live in the
//! `wire` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod net;
pub mod pages;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
