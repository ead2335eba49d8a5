//! Functions the server-rendered markup calls by name (`onclick="addToCompare(4)"`).
//!
//! Each one is a closure over the page's `Rc<App>`, installed on `window`;
//! the helpers are also grouped under `window.LoanFinderApp`.

use std::rc::Rc;

use js_sys::{Object, Reflect};
use lf_core::credit;
use lf_core::emi;
use lf_core::format;
use lf_core::share::LoanInfo;
use lf_core::validate;
use lf_core::{Notice, Severity};
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::calculator;
use crate::dom;
use crate::platform;

/// Registers functions on `window` and `LoanFinderApp`. The closures are
/// converted with `into_js_value`, so they live for the rest of the page.
struct Exporter {
    window: JsValue,
    namespace: Object,
}

impl Exporter {
    fn global(&self, name: &str, function: JsValue) -> Result<(), JsValue> {
        Reflect::set(&self.window, &JsValue::from_str(name), &function).map(drop)
    }

    fn namespaced(&self, name: &str, function: JsValue) -> Result<(), JsValue> {
        Reflect::set(&self.namespace, &JsValue::from_str(name), &function).map(drop)
    }

    fn both(&self, name: &str, function: JsValue) -> Result<(), JsValue> {
        self.namespaced(name, function.clone())?;
        self.global(name, function)
    }
}

/// Loan ids arrive as numbers or strings; both key the same entry.
fn loan_key(value: &JsValue) -> Option<String> {
    if let Some(s) = value.as_string() {
        return Some(s);
    }
    let n = value.as_f64()?;
    if n.fract() == 0.0 && n.abs() < 1e15 {
        Some(format!("{}", n as i64))
    } else {
        Some(n.to_string())
    }
}

fn js_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
        .unwrap_or_default()
}

/// Numbers pass through; strings keep their leading number, as `parseFloat`
/// would.
fn js_number(value: &JsValue) -> f64 {
    value
        .as_f64()
        .or_else(|| value.as_string().as_deref().and_then(emi::parse_leading))
        .unwrap_or(f64::NAN)
}

pub fn install(app: &Rc<App>) -> Result<(), JsValue> {
    let exporter = Exporter {
        window: dom::window().into(),
        namespace: Object::new(),
    };

    let a = Rc::clone(app);
    exporter.both(
        "calculateEMI",
        Closure::<dyn Fn()>::new(move || calculator::calculate_emi(&a)).into_js_value(),
    )?;

    exporter.global(
        "calculateEMIDetailed",
        Closure::<dyn Fn() -> JsValue>::new(calculator::calculate_emi_detailed).into_js_value(),
    )?;

    exporter.both(
        "printLoanDetails",
        Closure::<dyn Fn()>::new(|| {
            if let Err(e) = dom::window().print() {
                gloo_console::error!(format!("print failed: {}", dom::describe(&e)));
            }
        })
        .into_js_value(),
    )?;

    let a = Rc::clone(app);
    exporter.both(
        "shareLoan",
        Closure::<dyn Fn(JsValue)>::new(move |name: JsValue| {
            wasm_bindgen_futures::spawn_local(platform::share_loan(Rc::clone(&a), js_text(&name)));
        })
        .into_js_value(),
    )?;

    let a = Rc::clone(app);
    exporter.global(
        "copyLoanDetails",
        Closure::<dyn Fn(JsValue)>::new(move |info: JsValue| {
            match serde_wasm_bindgen::from_value::<LoanInfo>(info) {
                Ok(info) => {
                    let copy = platform::copy_loan_details(Rc::clone(&a), info);
                    wasm_bindgen_futures::spawn_local(copy);
                }
                Err(e) => gloo_console::error!(format!("copyLoanDetails: {e}")),
            }
        })
        .into_js_value(),
    )?;

    let a = Rc::clone(app);
    exporter.global(
        "addToCompare",
        Closure::<dyn Fn(JsValue)>::new(move |id: JsValue| match loan_key(&id) {
            Some(id) => {
                a.with_controller(|c| c.add_to_compare(id));
            }
            None => gloo_console::warn!("addToCompare: loan id must be a string or number"),
        })
        .into_js_value(),
    )?;

    let a = Rc::clone(app);
    exporter.global(
        "removeFromCompare",
        Closure::<dyn Fn(JsValue)>::new(move |id: JsValue| match loan_key(&id) {
            Some(id) => {
                a.with_controller(|c| c.remove_from_compare(&id));
            }
            None => gloo_console::warn!("removeFromCompare: loan id must be a string or number"),
        })
        .into_js_value(),
    )?;

    exporter.global(
        "checkCreditScoreEligibility",
        Closure::<dyn Fn(JsValue) -> JsValue>::new(|score: JsValue| {
            JsValue::from_str(credit::eligibility_message(js_number(&score)))
        })
        .into_js_value(),
    )?;

    exporter.global(
        "updateAmountFromSlider",
        Closure::<dyn Fn(JsValue)>::new(|value: JsValue| {
            calculator::update_amount_from_slider(&value)
        })
        .into_js_value(),
    )?;

    exporter.namespaced(
        "formatCurrency",
        Closure::<dyn Fn(JsValue) -> JsValue>::new(|amount: JsValue| {
            JsValue::from_str(&format::format_currency(js_number(&amount)))
        })
        .into_js_value(),
    )?;

    exporter.namespaced(
        "validatePhone",
        Closure::<dyn Fn(JsValue) -> JsValue>::new(|phone: JsValue| {
            JsValue::from_bool(validate::is_valid_phone(&js_text(&phone)))
        })
        .into_js_value(),
    )?;

    exporter.namespaced(
        "validateEmail",
        Closure::<dyn Fn(JsValue) -> JsValue>::new(|email: JsValue| {
            JsValue::from_bool(validate::is_valid_email(&js_text(&email)))
        })
        .into_js_value(),
    )?;

    let a = Rc::clone(app);
    exporter.namespaced(
        "showNotification",
        Closure::<dyn Fn(JsValue, JsValue)>::new(move |message: JsValue, kind: JsValue| {
            let severity = kind
                .as_string()
                .map(|k| Severity::from_name(&k))
                .unwrap_or_default();
            a.notify(&Notice::new(js_text(&message), severity));
        })
        .into_js_value(),
    )?;

    Reflect::set(
        &exporter.window,
        &JsValue::from_str("LoanFinderApp"),
        &exporter.namespace,
    )?;
    Ok(())
}
