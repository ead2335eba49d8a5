//! DOM helpers.
//!
//! Elements are looked up on demand: the server-rendered page decides which
//! widgets exist, and every caller handles absence.

use lf_core::{Capability, LoanError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

// ── Lookup ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

/// Like [`by_id_typed`], but absence is an error naming the element.
pub fn require<T: JsCast>(id: &str) -> Result<T, LoanError> {
    by_id_typed(id).ok_or_else(|| LoanError::missing(format!("#{id}")))
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match document().query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(_) => Vec::new(),
    }
}

pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(_) => Vec::new(),
    }
}

fn collect(nl: &web_sys::NodeList) -> Vec<Element> {
    (0..nl.length())
        .filter_map(|i| nl.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

// ── Mutation ──

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn create_element(tag: &str) -> Result<Element, LoanError> {
    document()
        .create_element(tag)
        .map_err(|e| js_error(Capability::Dom, &e))
}

pub fn scroll_into_view(el: &Element, block: ScrollLogicalPosition) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(block);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Run the element's own constraint validation. Non-form elements pass.
pub fn field_is_valid(el: &Element) -> bool {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.check_validity()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.check_validity()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.check_validity()
    } else {
        true
    }
}

// ── Events ──

/// Attach a listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        gloo_console::error!(format!("failed to bind {event}: {}", describe(&e)));
        return;
    }
    cb.forget();
}

// ── Errors ──

/// Best-effort text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", err.name(), err.message());
    }
    format!("{value:?}")
}

pub fn js_error(capability: Capability, value: &JsValue) -> LoanError {
    LoanError::platform(capability, describe(value))
}

/// The `name` of a thrown DOMException or Error, e.g. `"AbortError"`.
pub fn error_name(value: &JsValue) -> Option<String> {
    js_sys::Reflect::get(value, &JsValue::from_str("name"))
        .ok()?
        .as_string()
}
