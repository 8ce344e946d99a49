//! Page Configuration
//!
//! Optional overrides read from `window.STOREFRONT_CONFIG`. Every field has a
//! default matching the storefront backend's routes.

use log::LevelFilter;
use serde::Deserialize;

/// Global the page may define before loading the wasm bundle
pub const CONFIG_GLOBAL: &str = "STOREFRONT_CONFIG";

/// A `{field}` / `{field}-count` pair with its character limit
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CounterConfig {
    pub field: String,
    pub limit: u32,
}

impl CounterConfig {
    pub fn new(field: &str, limit: u32) -> Self {
        Self {
            field: field.to_string(),
            limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Prefix for every API path, empty for same-origin
    pub api_base: String,
    pub cart_path: String,
    pub remove_path: String,
    pub checkout_path: String,
    pub alert_dismiss_ms: u32,
    pub counters: Vec<CounterConfig>,
    pub log_level: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            cart_path: "/api/cart".to_string(),
            remove_path: "/api/cart/remove".to_string(),
            checkout_path: "/create-checkout-session".to_string(),
            alert_dismiss_ms: 3000,
            counters: vec![
                CounterConfig::new("name", 50),
                CounterConfig::new("description", 80),
            ],
            log_level: "info".to_string(),
        }
    }
}

impl StorefrontConfig {
    pub fn cart_url(&self) -> String {
        format!("{}{}", self.api_base, self.cart_path)
    }

    pub fn remove_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.api_base, self.remove_path.trim_end_matches('/'), id)
    }

    pub fn checkout_url(&self) -> String {
        format!("{}{}", self.api_base, self.checkout_path)
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Read the page global. An absent global yields the defaults.
    pub fn load() -> Result<Self, serde_wasm_bindgen::Error> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        match js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into()) {
            Ok(raw) if !raw.is_undefined() && !raw.is_null() => serde_wasm_bindgen::from_value(raw),
            _ => Ok(Self::default()),
        }
    }
}
