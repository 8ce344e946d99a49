//! Checkout Endpoint

use gloo_net::http::Request;

use super::{CheckoutBackend, HttpBackend};
use crate::error::ApiError;
use crate::models::CheckoutResponse;

impl CheckoutBackend for HttpBackend {
    async fn create_checkout_session(&self) -> Result<CheckoutResponse, ApiError> {
        // Error payloads come back with 400/500, so decode regardless of status
        let resp = Request::post(&self.config.checkout_url())
            .json(&serde_json::json!({}))?
            .send()
            .await?;
        Ok(resp.json::<CheckoutResponse>().await?)
    }
}
