//! Cart Endpoints

use gloo_net::http::Request;

use super::{CartBackend, HttpBackend};
use crate::error::ApiError;
use crate::models::{Cart, ItemId, RemoveResponse};

impl CartBackend for HttpBackend {
    async fn fetch_cart(&self) -> Result<Cart, ApiError> {
        let resp = Request::get(&self.config.cart_url()).send().await?;
        Ok(resp.json::<Cart>().await?)
    }

    async fn remove_item(&self, id: &ItemId) -> Result<RemoveResponse, ApiError> {
        // 404 still carries a JSON body with `success: false`
        let resp = Request::delete(&self.config.remove_url(id.as_str()))
            .send()
            .await?;
        Ok(resp.json::<RemoveResponse>().await?)
    }
}
