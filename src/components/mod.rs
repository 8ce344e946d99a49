//! UI Components
//!
//! Leptos components mounted into the server-rendered page.

mod cart_list;

pub use cart_list::CartList;
