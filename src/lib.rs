use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;

/// Initialize logging, panic reporting and mount the dashboard
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    // Time provider first so the logger can stamp its own init line
    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    // Bridge logger: browser console + in-page debug console
    let bridge_logger = Box::new(app::LeptosLogger::new());
    domain::logging::init_logger(bridge_logger);

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Roaming plan dashboard initialized",
    );

    leptos::mount_to_body(app::App);
}
