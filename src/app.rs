//! Storefront Page Bootstrap
//!
//! Builds every controller once per page load and binds it to the
//! server-rendered markup. Widgets whose elements are missing from the
//! current page are skipped.

use std::rc::Rc;

use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, PageTransitionEvent};

use crate::api::HttpBackend;
use crate::components::CartList;
use crate::config::StorefrontConfig;
use crate::controllers::{
    AlertDismisser, CartController, CharCounter, CheckoutController, NavScroll, RefreshOutcome,
};
use crate::dom::{self, ids, BrowserNavigator, TimeoutScheduler};
use crate::error::DomError;
use crate::models::ItemId;
use crate::store::{CartState, CartStateStoreFields, CartStore, FirstSnapshot, StoreCartView};

const SIDEBAR_OPEN_CLASS: &str = "visible";

type PageCartController = CartController<HttpBackend, StoreCartView>;

/// Run `start` once the DOM is parsed
pub fn run_when_ready(config: StorefrontConfig) -> Result<(), DomError> {
    let document = dom::document()?;
    if document.ready_state() != "loading" {
        start(&config);
        return Ok(());
    }
    let mut pending = Some(config);
    dom::listen(&document, "DOMContentLoaded", move |_| {
        if let Some(config) = pending.take() {
            start(&config);
        }
    })
}

pub fn start(config: &StorefrontConfig) {
    let bindings: [(&str, Result<(), DomError>); 5] = [
        ("nav", bind_nav()),
        ("counters", bind_counters(config)),
        ("alerts", schedule_alert_dismissal(config.alert_dismiss_ms)),
        ("cart", bind_cart(config)),
        ("checkout", bind_checkout(config)),
    ];
    for (name, result) in bindings {
        match result {
            Ok(()) => debug!("bound {}", name),
            Err(e) => debug!("skipped {}: {}", name, e),
        }
    }
    info!("storefront ui ready");
}

// ========================
// Nav
// ========================

fn bind_nav() -> Result<(), DomError> {
    let nav: HtmlElement = dom::element_by_id(ids::MAIN_NAV)?;
    let mut scroll = NavScroll::new(f64::from(nav.client_height()));
    let window = dom::window()?;
    dom::listen(&window, "scroll", move |_| {
        let Some(current_top) = dom::body_scroll_top() else {
            return;
        };
        let next = scroll.on_scroll(current_top, dom::nav_classes(&nav));
        dom::apply_nav_classes(&nav, next);
    })
}

// ========================
// Character counters
// ========================

fn bind_counters(config: &StorefrontConfig) -> Result<(), DomError> {
    for counter in config.counters.iter().map(CharCounter::from) {
        if let Err(e) = bind_counter(counter) {
            debug!("counter not bound: {}", e);
        }
    }
    Ok(())
}

fn bind_counter(counter: CharCounter) -> Result<(), DomError> {
    let field: HtmlElement = dom::element_by_id(counter.field_id())?;
    let label: Element = dom::element_by_id(&counter.counter_id())?;
    update_counter(&counter, &field, &label);
    let input_target = field.clone();
    dom::listen(&input_target, "input", move |_| {
        update_counter(&counter, &field, &label);
    })
}

fn update_counter(counter: &CharCounter, field: &HtmlElement, label: &Element) {
    let Some(value) = dom::field_value(field) else {
        warn!("#{} is not a text field", counter.field_id());
        return;
    };
    let state = counter.evaluate(&value);
    label.set_text_content(Some(state.label().as_str()));
    let (add, remove) = state.classes();
    dom::remove_class(label, remove);
    dom::add_class(label, add);
}

// ========================
// Flash alerts
// ========================

fn schedule_alert_dismissal(delay_ms: u32) -> Result<(), DomError> {
    let alerts = dom::query_all(".alert")?;
    AlertDismisser::new(TimeoutScheduler, delay_ms).dismiss_all(alerts, dom::close_alert);
    Ok(())
}

// ========================
// Cart sidebar
// ========================

/// Store-driven sidebar views, mounted over the server markup once the first
/// snapshot is in
struct CartMount {
    list: HtmlElement,
    total: HtmlElement,
    count: HtmlElement,
    store: CartStore,
    on_remove: Callback<ItemId>,
    first: FirstSnapshot,
}

impl CartMount {
    fn after_refresh(&self, outcome: &RefreshOutcome) {
        if !self.first.arrived(outcome) {
            return;
        }
        let (store, on_remove) = (self.store, self.on_remove);
        self.list.set_inner_html("");
        mount_to(self.list.clone(), move || view! { <CartList store=store on_remove=on_remove /> }).forget();
        self.total.set_text_content(None);
        mount_to(self.total.clone(), move || move || store.summary().get().total_display()).forget();
        self.count.set_text_content(None);
        mount_to(self.count.clone(), move || move || store.summary().get().count_display()).forget();
    }
}

/// Add-to-cart forms are left to post natively: the backend redirects after
/// committing, and the page it lands on refreshes the cart on load.
fn bind_cart(config: &StorefrontConfig) -> Result<(), DomError> {
    let sidebar: Element = dom::element_by_id(ids::CART_SIDEBAR)?;
    let toggle: Element = dom::element_by_id(ids::CART_TOGGLE)?;
    let close: Element = dom::element_by_id(ids::CART_CLOSE)?;
    let list: HtmlElement = dom::element_by_id(ids::CART_ITEMS)?;
    let total: HtmlElement = dom::element_by_id(ids::CART_TOTAL)?;
    let count: HtmlElement = dom::element_by_id(ids::CART_COUNT)?;

    let store = CartStore::new(CartState::default());
    let controller = CartController::new(HttpBackend::new(config.clone()), StoreCartView::new(store));

    let on_remove = {
        let controller = controller.clone();
        Callback::new(move |id: ItemId| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.remove_item(&id).await;
            });
        })
    };

    let mount = Rc::new(CartMount {
        list,
        total,
        count,
        store,
        on_remove,
        first: FirstSnapshot::default(),
    });

    refresh(&controller, &mount);

    {
        let controller = controller.clone();
        let mount = mount.clone();
        let sidebar = sidebar.clone();
        dom::listen(&toggle, "click", move |_| {
            dom::add_class(&sidebar, SIDEBAR_OPEN_CLASS);
            refresh(&controller, &mount);
        })?;
    }
    dom::listen(&close, "click", move |_| {
        dom::remove_class(&sidebar, SIDEBAR_OPEN_CLASS);
    })?;

    // Coming back from the add-to-cart redirect restores this page from the
    // back-forward cache without a load, so its snapshot predates the add
    let window = dom::window()?;
    dom::listen(&window, "pageshow", move |ev| {
        let restored = ev
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(PageTransitionEvent::persisted);
        if restored {
            debug!("page restored from cache, refreshing cart");
            refresh(&controller, &mount);
        }
    })
}

fn refresh(controller: &PageCartController, mount: &Rc<CartMount>) {
    let controller = controller.clone();
    let mount = mount.clone();
    spawn_local(async move {
        let outcome = controller.refresh().await;
        mount.after_refresh(&outcome);
    });
}

// ========================
// Checkout
// ========================

fn bind_checkout(config: &StorefrontConfig) -> Result<(), DomError> {
    let button: Element = dom::element_by_id(ids::CHECKOUT_BUTTON)?;
    let controller = CheckoutController::new(HttpBackend::new(config.clone()), BrowserNavigator);
    dom::listen(&button, "click", move |_| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.start().await;
        });
    })
}
