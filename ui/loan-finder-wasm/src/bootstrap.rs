//! Bootstrap 5 widgets, reached through the page's global `bootstrap` object.
//!
//! Constructors are imported with `catch`, so a page without Bootstrap gets
//! an `Err` instead of an uncaught `ReferenceError`.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap)]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Alert;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap)]
    fn new(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method)]
    fn close(this: &Alert);
}

pub fn activate_tooltip(element: &Element) -> Result<(), JsValue> {
    Tooltip::new(element).map(drop)
}

/// Close a page alert with Bootstrap's fade, or remove it outright.
pub fn close_alert(element: &Element) {
    match Alert::new(element) {
        Ok(alert) => alert.close(),
        Err(_) => element.remove(),
    }
}
