//! Browser UI of the workforce portal. All data lives in `localStorage`
//! through [`shared::storage::BrowserStore`].

pub mod app;
pub mod app_shell;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod reports;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

/// Logging and panic hook first, then the app.
#[wasm_bindgen(start)]
pub fn start() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    console_error_panic_hook::set_once();
    log::info!("workforce portal starting");

    leptos::mount::mount_to_body(app::App);
}
