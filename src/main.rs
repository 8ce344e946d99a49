//! Storefront UI Entry Point

mod api;
mod app;
mod components;
mod config;
mod controllers;
mod dom;
mod error;
mod models;
mod store;

use config::StorefrontConfig;

/// Forward panics to the console, followed by the log lines leading up to them
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        let lines = rolling_logger::recent_lines();
        if !lines.is_empty() {
            web_sys::console::error_1(
                &format!("[STOREFRONT] last {} log lines:\n{}", lines.len(), lines.join("\n")).into(),
            );
        }
    }));
}

fn main() {
    install_panic_hook();

    let loaded = StorefrontConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    if let Err(e) = rolling_logger::init(config.level_filter(), rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("[STOREFRONT] logger already set: {}", e).into());
    }
    if let Err(e) = loaded {
        log::warn!("ignoring invalid {}: {}", config::CONFIG_GLOBAL, e);
    }

    if let Err(e) = app::run_when_ready(config) {
        log::error!("storefront ui not started: {}", e);
    }
}
