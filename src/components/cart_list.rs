//! Cart List Component
//!
//! Rows of the cart sidebar, rebuilt from the store on every snapshot.

use leptos::prelude::*;

use crate::models::{format_money, CartItem, ItemId};
use crate::store::{CartStateStoreFields, CartStore};

/// All cart lines, mounted into the sidebar's `<ul>`
#[component]
pub fn CartList(
    store: CartStore,
    #[prop(into)] on_remove: Callback<ItemId>,
) -> impl IntoView {
    view! {
        {move || {
            store
                .items()
                .get()
                .into_iter()
                .map(|item| view! { <CartRow item=item on_remove=on_remove /> })
                .collect_view()
        }}
    }
}

/// One cart line with its delete control
#[component]
fn CartRow(item: CartItem, on_remove: Callback<ItemId>) -> impl IntoView {
    let CartItem { id, name, image, price, quantity, subtotal } = item;
    let data_id = id.to_string();
    let unit_line = format!("${} × {}", format_money(price), quantity);
    let subtotal = format!("${}", format_money(subtotal));
    let alt = name.clone();

    view! {
        <li class="list-group-item d-flex align-items-center">
            <img
                src=image
                alt=alt
                style="width:50px;height:50px;object-fit:cover;margin-right:10px;border-radius:6px;"
            />
            <div class="flex-grow-1">
                <strong>{name}</strong>
                <br />
                {unit_line}
            </div>
            <span class="badge bg-primary rounded-pill me-2">{subtotal}</span>
            <button
                class="btn btn-sm btn-danger remove-btn"
                data-id=data_id
                on:click=move |_| on_remove.run(id.clone())
            >
                <i class="fas fa-trash"></i>
            </button>
        </li>
    }
}
