//! Page Controllers
//!
//! One instance of each is built per page load. None of them touch the DOM
//! directly; `dom` and `app` bind them to the page.

mod alerts;
mod cart;
mod checkout;
mod counter;
mod nav;

pub use alerts::{AlertDismisser, Scheduler};
pub use cart::{CartController, CartView, RefreshOutcome};
pub use checkout::{CheckoutController, Navigator};
pub use counter::CharCounter;
pub use nav::{NavClasses, NavScroll, FIXED_CLASS, VISIBLE_CLASS};
