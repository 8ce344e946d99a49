//! Cart State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The cart
//! controller writes the last fetched snapshot here; the mounted list and the
//! summary badges read from it.

use std::cell::Cell;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controllers::{CartView, RefreshOutcome};
use crate::models::{Cart, CartItem, CartSummary};

/// Last snapshot fetched from the backend
#[derive(Clone, Debug, Default, Store)]
pub struct CartState {
    /// Cart lines in backend order
    pub items: Vec<CartItem>,
    pub summary: CartSummary,
}

/// Type alias for the store
pub type CartStore = Store<CartState>;

/// `CartView` that publishes snapshots into the store
#[derive(Clone, Copy)]
pub struct StoreCartView {
    store: CartStore,
}

impl StoreCartView {
    pub fn new(store: CartStore) -> Self {
        Self { store }
    }
}

impl CartView for StoreCartView {
    fn render(&self, cart: &Cart, summary: &CartSummary) {
        *self.store.items().write() = cart.items.clone();
        *self.store.summary().write() = *summary;
    }
}

/// Tells the page when the first snapshot has been rendered. Until then the
/// server markup in the sidebar and badges stays in place.
#[derive(Debug, Default)]
pub struct FirstSnapshot(Cell<bool>);

impl FirstSnapshot {
    /// True exactly once, for the first successful refresh
    pub fn arrived(&self, outcome: &RefreshOutcome) -> bool {
        matches!(outcome, RefreshOutcome::Rendered(_)) && !self.0.replace(true)
    }
}
