//! Loan Finder WASM frontend
//!
//! Browser glue for the loan-finder pages: the EMI calculator, the compare
//! list, share/copy actions, toast notifications and page cosmetics. The
//! decision logic lives in `lf-core`; this crate binds it to the DOM.

pub mod app;
pub mod bootstrap;
pub mod calculator;
pub mod dom;
pub mod events;
pub mod globals;
pub mod platform;
pub mod view;

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::App;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let app = App::new(app::load_config());

    // Inline `onclick` handlers may fire before the DOM finishes loading.
    globals::install(&app)?;

    if dom::document().ready_state() == "loading" {
        let ready = Rc::clone(&app);
        let on_ready = Closure::once(move |_: web_sys::Event| {
            gloo_console::log!("DOM Content Loaded");
            events::bind_events(&ready);
        });
        dom::document().add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
    } else {
        events::bind_events(&app);
    }

    log_banner();

    Ok(())
}

fn log_banner() {
    gloo_console::log!(
        "%c🏦 Loan Finder App",
        "font-size: 20px; font-weight: bold; color: #0d6efd;"
    );
    gloo_console::log!("%cAll systems ready! 🚀", "color: #198754;");
}
