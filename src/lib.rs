/// WireAdmin web console
///
/// Leptos-based administration interface for a WireAdmin VPN fleet:
/// node operations (rebalance, health checks, connection tests, removal),
/// VPN key deactivation, and user block management.

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod types;
pub mod utils;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount_to_body(App);
}
