pub mod app;
pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;

use shared::config::config;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate; config loading logs too,
    // so the configured level is applied afterwards
    _ = console_log::init_with_level(log::Level::Trace);
    log::set_max_level(config().logging.level_filter());
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
