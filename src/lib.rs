use wasm_bindgen::prelude::*;

use crate::domain::logging::{get_logger, LogComponent};

pub mod app;
pub mod application;
pub mod domain;
pub mod global_state;
pub mod infrastructure;

/// Wires the browser-backed services into the domain seams and mounts the UI.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::new_development()));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🚀 Gold pricing calculator initialized",
    );

    leptos::mount_to_body(app::App);
}
