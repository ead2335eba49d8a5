//! Clipboard and native share-sheet calls.
//!
//! Both APIs are feature-detected through `Reflect` at call time, and their
//! promises are awaited once with no retry or timeout.

use std::rc::Rc;

use js_sys::{Function, Promise, Reflect};
use lf_core::share::{self, LoanInfo, NativeShare, ShareOutcome, SharePayload};
use lf_core::{Capability, LoanError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::app::App;
use crate::dom;

fn navigator_method(object_path: Option<&str>, method: &str) -> Option<(JsValue, Function)> {
    let navigator: JsValue = dom::window().navigator().into();
    let receiver = match object_path {
        Some(name) => Reflect::get(&navigator, &JsValue::from_str(name)).ok()?,
        None => navigator,
    };
    if receiver.is_undefined() || receiver.is_null() {
        return None;
    }
    let func = Reflect::get(&receiver, &JsValue::from_str(method))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    Some((receiver, func))
}

/// `navigator.clipboard.writeText(text)`.
pub async fn write_clipboard(text: &str) -> Result<(), LoanError> {
    let (clipboard, write_text) = navigator_method(Some("clipboard"), "writeText")
        .ok_or_else(|| LoanError::platform(Capability::Clipboard, "clipboard API unavailable"))?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| dom::js_error(Capability::Clipboard, &e))?;
    JsFuture::from(Promise::resolve(&promise))
        .await
        .map_err(|e| dom::js_error(Capability::Clipboard, &e))?;
    Ok(())
}

/// `navigator.share(payload)`, classified for the fallback chain.
pub async fn native_share(payload: &SharePayload) -> NativeShare {
    let Some((navigator, share)) = navigator_method(None, "share") else {
        return NativeShare::Unavailable;
    };
    let arg = match serde_wasm_bindgen::to_value(payload) {
        Ok(v) => v,
        Err(e) => return NativeShare::Failed(e.to_string()),
    };
    let promise = match share.call1(&navigator, &arg) {
        Ok(p) => p,
        Err(e) => return NativeShare::Failed(dom::describe(&e)),
    };
    match JsFuture::from(Promise::resolve(&promise)).await {
        Ok(_) => NativeShare::Shared,
        Err(e) if dom::error_name(&e).as_deref() == Some("AbortError") => NativeShare::Dismissed,
        Err(e) => NativeShare::Failed(dom::describe(&e)),
    }
}

fn current_url() -> String {
    dom::window().location().href().unwrap_or_default()
}

/// Share a loan page, falling back to copying its URL.
pub async fn share_loan(app: Rc<App>, loan_name: String) {
    let url = current_url();
    let payload = SharePayload::for_loan(&loan_name, &url);

    let native = native_share(&payload).await;
    let outcome = match ShareOutcome::from_native(&native) {
        Some(outcome) => outcome,
        None => {
            if let NativeShare::Failed(reason) = &native {
                gloo_console::log!(format!("Error sharing: {reason}"));
            }
            let copied = write_clipboard(&url).await.map_err(|e| e.to_string());
            if let Err(reason) = &copied {
                gloo_console::error!(format!("Failed to copy: {reason}"));
            }
            ShareOutcome::from_copy(copied)
        }
    };

    if outcome == ShareOutcome::Shared {
        gloo_console::log!("Shared successfully");
    }
    if let Some(notice) = outcome.notice() {
        app.notify(&notice);
    }
}

/// Copy a formatted loan summary to the clipboard.
pub async fn copy_loan_details(app: Rc<App>, info: LoanInfo) {
    let result = write_clipboard(&info.clipboard_text())
        .await
        .map_err(|e| e.to_string());
    if let Err(reason) = &result {
        gloo_console::error!(format!("Copy failed: {reason}"));
    }
    app.notify(&share::copy_details_notice(&result));
}
