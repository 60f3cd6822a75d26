//! # client
//!
//! Leptos + WASM frontend for the Tablekit booking demo.
//!
//! This crate contains the landing page, the floor-plan builder and the
//! booking view. All layout logic lives in the `floorplan` crate; the
//! components here translate DOM events into `EditorCore` calls and carry
//! out the actions it returns (toasts, storage writes, redraws).

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
