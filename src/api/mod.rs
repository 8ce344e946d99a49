//! Storefront API
//!
//! Frontend bindings to the backend's HTTP endpoints, organized by domain.

mod cart;
mod checkout;

use crate::config::StorefrontConfig;
use crate::error::ApiError;
use crate::models::{Cart, CheckoutResponse, ItemId, RemoveResponse};

/// Cart endpoints as seen by the cart controller
#[allow(async_fn_in_trait)]
pub trait CartBackend {
    async fn fetch_cart(&self) -> Result<Cart, ApiError>;

    async fn remove_item(&self, id: &ItemId) -> Result<RemoveResponse, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait CheckoutBackend {
    async fn create_checkout_session(&self) -> Result<CheckoutResponse, ApiError>;
}

/// `fetch`-backed client for the same-origin storefront backend
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: StorefrontConfig,
}

impl HttpBackend {
    pub fn new(config: StorefrontConfig) -> Self {
        Self { config }
    }
}
