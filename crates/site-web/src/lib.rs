//! TRust Landing Page Frontend
//!
//! Leptos-based WASM frontend rendering the marketing page.

mod app;
mod components;
mod dom;
mod icons;
mod pages;
mod sections;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
