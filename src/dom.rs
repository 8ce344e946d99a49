//! DOM Helpers
//!
//! Thin wrappers over web-sys for binding controllers to the server-rendered
//! page by element id.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Window};

use crate::controllers::{NavClasses, Navigator, Scheduler, FIXED_CLASS, VISIBLE_CLASS};
use crate::error::DomError;

/// Element ids the page template provides
pub mod ids {
    pub const MAIN_NAV: &str = "mainNav";
    pub const CART_SIDEBAR: &str = "cart-sidebar";
    pub const CART_TOGGLE: &str = "cart-toggle";
    pub const CART_CLOSE: &str = "cart-close";
    pub const CART_ITEMS: &str = "cart-items";
    pub const CART_TOTAL: &str = "cart-total";
    pub const CART_COUNT: &str = "cart-count";
    pub const CHECKOUT_BUTTON: &str = "checkout-button";
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Alert)]
    type BootstrapAlert;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Alert")]
    fn new(element: &Element) -> Result<BootstrapAlert, JsValue>;

    #[wasm_bindgen(catch, method)]
    fn close(this: &BootstrapAlert) -> Result<(), JsValue>;
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or_else(|| DomError::Js("no window".to_string()))
}

pub fn document() -> Result<Document, DomError> {
    window()?
        .document()
        .ok_or_else(|| DomError::Js("no document".to_string()))
}

pub fn element_by_id<T: JsCast>(id: &str) -> Result<T, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongElementType(id.to_string()))
}

pub fn query_all(selector: &str) -> Result<Vec<Element>, DomError> {
    let nodes = document()?.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Attach a listener for the lifetime of the page
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), DomError> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn add_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().add_1(class) {
        log::debug!("could not add class {}: {:?}", class, e);
    }
}

pub fn remove_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().remove_1(class) {
        log::debug!("could not remove class {}: {:?}", class, e);
    }
}

pub fn nav_classes(nav: &Element) -> NavClasses {
    let list = nav.class_list();
    NavClasses {
        fixed: list.contains(FIXED_CLASS),
        visible: list.contains(VISIBLE_CLASS),
    }
}

pub fn apply_nav_classes(nav: &Element, classes: NavClasses) {
    for (class, on) in [(FIXED_CLASS, classes.fixed), (VISIBLE_CLASS, classes.visible)] {
        if on {
            add_class(nav, class);
        } else {
            remove_class(nav, class);
        }
    }
}

/// Distance the body has scrolled, positive going down
pub fn body_scroll_top() -> Option<f64> {
    let body = document().ok()?.body()?;
    Some(-body.get_bounding_client_rect().top())
}

/// Current value of an `<input>` or `<textarea>`
pub fn field_value(element: &HtmlElement) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
}

/// Close a flash message through Bootstrap, or drop it if Bootstrap is absent
pub fn close_alert(element: &Element) {
    match BootstrapAlert::new(element).and_then(|alert| alert.close()) {
        Ok(()) => {}
        Err(e) => {
            log::debug!("bootstrap alert unavailable ({:?}), removing element", e);
            element.remove();
        }
    }
}

/// `Scheduler` backed by `setTimeout`; timers outlive the caller
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

/// `Navigator` backed by `window.location` and `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, url: &str) {
        let result = window().and_then(|w| w.location().set_href(url).map_err(DomError::from));
        if let Err(e) = result {
            log::error!("could not navigate to {}: {}", url, e);
        }
    }

    fn alert(&self, message: &str) {
        let result = window().and_then(|w| w.alert_with_message(message).map_err(DomError::from));
        if let Err(e) = result {
            log::error!("could not show alert: {}", e);
        }
    }
}
