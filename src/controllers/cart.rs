//! Cart View Controller
//!
//! Keeps the rendered cart list, total and badge count equal to the last
//! snapshot fetched from the backend. There is no local cache: every mutation
//! is followed by a fresh fetch.

use log::{debug, error, warn};

use crate::api::CartBackend;
use crate::models::{Cart, CartSummary, ItemId};

/// Render target for a cart snapshot
pub trait CartView {
    /// Replace whatever is shown with `cart`
    fn render(&self, cart: &Cart, summary: &CartSummary);
}

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    Rendered(CartSummary),
    /// Previous rendering left untouched
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    Removed(RefreshOutcome),
    Rejected,
    Failed,
}

#[derive(Clone)]
pub struct CartController<B, V> {
    backend: B,
    view: V,
}

impl<B: CartBackend, V: CartView> CartController<B, V> {
    pub fn new(backend: B, view: V) -> Self {
        Self { backend, view }
    }

    /// Fetch the cart and re-render it. Concurrent calls are not de-duplicated.
    pub async fn refresh(&self) -> RefreshOutcome {
        match self.backend.fetch_cart().await {
            Ok(cart) => {
                let summary = cart.summary();
                if let Some(server_total) = cart.total {
                    if (server_total - summary.total).abs() > 0.005 {
                        debug!("server total {:.2} differs from computed {}", server_total, summary.total_display());
                    }
                }
                debug!("rendering {} cart lines", cart.items.len());
                self.view.render(&cart, &summary);
                RefreshOutcome::Rendered(summary)
            }
            Err(e) => {
                error!("Error loading cart: {}", e);
                RefreshOutcome::Failed
            }
        }
    }

    pub async fn remove_item(&self, id: &ItemId) -> RemoveOutcome {
        match self.backend.remove_item(id).await {
            Ok(resp) if resp.success => {
                debug!("removed one of item {} ({:?} left)", id, resp.remaining);
                RemoveOutcome::Removed(self.refresh().await)
            }
            Ok(resp) => {
                warn!(
                    "Error removing item {}: {}",
                    id,
                    resp.error.as_deref().unwrap_or("backend reported failure")
                );
                RemoveOutcome::Rejected
            }
            Err(e) => {
                error!("Error removing item {}: {}", id, e);
                RemoveOutcome::Failed
            }
        }
    }
}
