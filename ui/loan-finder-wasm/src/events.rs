//! Page-ready wiring.
//!
//! Each `init_*` binds one behaviour to whatever matching elements the page
//! rendered. None of them fail: a missing feature or element is logged and
//! skipped.

use std::rc::Rc;

use js_sys::Array;
use lf_core::emi;
use lf_core::notice::{self, Notice};
use lf_core::validate;
use lf_core::{TaskKey, format};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollLogicalPosition, ScrollToOptions,
};

use crate::app::App;
use crate::bootstrap;
use crate::dom;

/// Bind every page behaviour. Call once the DOM is ready.
pub fn bind_events(app: &Rc<App>) {
    init_alerts(app);
    init_form_validation(app);
    init_smooth_scroll();
    init_number_inputs();
    init_tooltips();
    init_animations(app);
    init_back_to_top(app);
    init_filter_form();
    init_search(app);
}

/// Auto-dismiss alerts the server rendered into the page.
fn init_alerts(app: &App) {
    let delay = app.config().alert_dismiss_ms;
    for alert in dom::query_all(".alert") {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay).await;
            bootstrap::close_alert(&alert);
        });
    }
}

// ── Forms ──

fn init_form_validation(app: &Rc<App>) {
    for form in dom::query_all("form") {
        let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
            continue;
        };

        {
            let app = Rc::clone(app);
            let target = form.clone();
            dom::listen(&form, "submit", move |event: Event| {
                if !target.check_validity() {
                    event.prevent_default();
                    event.stop_propagation();
                    app.notify(&Notice::error(notice::FORM_INVALID));
                }
                dom::add_class(&target, "was-validated");
            });
        }

        for field in dom::query_all_within(&form, "input, select, textarea") {
            let target = field.clone();
            dom::listen(&field, "blur", move |_: Event| {
                if dom::field_is_valid(&target) {
                    dom::remove_class(&target, "is-invalid");
                    dom::add_class(&target, "is-valid");
                } else {
                    dom::remove_class(&target, "is-valid");
                    dom::add_class(&target, "is-invalid");
                }
            });
        }
    }
}

fn init_number_inputs() {
    for el in dom::query_all(r#"input[type="number"]"#) {
        let Ok(input) = el.dyn_into::<HtmlInputElement>() else {
            continue;
        };

        let target = input.clone();
        dom::listen(&input, "input", move |_: Event| {
            let value = target.value();
            let cleaned = validate::sanitize_numeric(&value);
            if cleaned != value {
                target.set_value(&cleaned);
            }
        });

        let target = input.clone();
        dom::listen(&input, "blur", move |_: Event| {
            let Some(amount) = emi::parse_leading(&target.value()) else {
                return;
            };
            if amount >= 1000.0 {
                let formatted = format::format_currency(amount);
                gloo_console::log!(format!("Formatted amount: {formatted}"));
            }
        });
    }
}

fn init_filter_form() {
    for el in dom::query_all("#filterForm select") {
        let Ok(select) = el.dyn_into::<HtmlSelectElement>() else {
            continue;
        };
        let target = select.clone();
        dom::listen(&select, "change", move |_: Event| {
            gloo_console::log!("Filter changed:", target.name(), target.value());
        });
    }
}

/// Log the search term once typing pauses. Each keystroke replaces the
/// pending timer.
fn init_search(app: &Rc<App>) {
    let Some(el) = dom::query(r#"input[type="search"]"#) else {
        return;
    };
    let Ok(input) = el.dyn_into::<HtmlInputElement>() else {
        return;
    };
    let app = Rc::clone(app);
    let target = input.clone();
    dom::listen(&input, "input", move |_: Event| {
        let term = target.value().to_lowercase();
        let delay = app.config().search_debounce_ms;
        app.debounce(TaskKey::SearchDebounce, delay, move || {
            gloo_console::log!("Searching for:", term);
        });
    });
}

// ── Navigation ──

fn init_smooth_scroll() {
    for anchor in dom::query_all(r##"a[href^="#"]"##) {
        let target = anchor.clone();
        dom::listen(&anchor, "click", move |event: Event| {
            let href = target.get_attribute("href").unwrap_or_default();
            if href.is_empty() || href == "#" {
                return;
            }
            event.prevent_default();
            if let Some(section) = dom::query(&href) {
                dom::scroll_into_view(&section, ScrollLogicalPosition::Start);
            }
        });
    }
}

const BACK_TO_TOP_CSS: &str = "position: fixed; bottom: 20px; right: 20px; width: 50px; \
    height: 50px; border-radius: 50%; display: none; z-index: 1000; \
    box-shadow: 0 4px 12px rgba(0,0,0,0.3); transition: all 0.3s ease;";

fn init_back_to_top(app: &App) {
    let Some(body) = dom::document().body() else {
        gloo_console::error!("missing <body>");
        return;
    };
    let button = match dom::create_element("button").map(|el| el.unchecked_into::<HtmlElement>()) {
        Ok(b) => b,
        Err(err) => {
            gloo_console::error!(format!("back-to-top: {err}"));
            return;
        }
    };
    button.set_inner_html(r#"<i class="fas fa-arrow-up"></i>"#);
    button.set_class_name("btn btn-primary btn-back-to-top");
    let _ = button.set_attribute("aria-label", "Back to top");
    button.style().set_css_text(BACK_TO_TOP_CSS);
    if let Err(e) = body.append_child(&button) {
        gloo_console::error!(format!("back-to-top: {}", dom::describe(&e)));
        return;
    }

    let offset = app.config().back_to_top_offset;
    let target = button.clone();
    dom::listen(&dom::window(), "scroll", move |_: Event| {
        let scrolled = dom::window().scroll_y().unwrap_or(0.0);
        let display = if scrolled > offset { "block" } else { "none" };
        dom::set_style(&target, "display", display);
    });

    dom::listen(&button, "click", |_: Event| {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        dom::window().scroll_to_with_scroll_to_options(&opts);
    });

    let target = button.clone();
    dom::listen(&button, "mouseenter", move |_: Event| {
        dom::set_style(&target, "transform", "scale(1.1)");
    });
    let target = button.clone();
    dom::listen(&button, "mouseleave", move |_: Event| {
        dom::set_style(&target, "transform", "scale(1)");
    });
}

// ── Cosmetics ──

fn init_tooltips() {
    for el in dom::query_all(r#"[data-bs-toggle="tooltip"]"#) {
        if let Err(e) = bootstrap::activate_tooltip(&el) {
            gloo_console::warn!(format!("tooltips disabled: {}", dom::describe(&e)));
            return;
        }
    }
}

/// Fade cards and sections in the first time they scroll into view.
fn init_animations(app: &App) {
    let config = app.config();

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::add_class(&target, "fade-in-up");
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.animation_threshold));
    options.set_root_margin(&config.animation_root_margin);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                gloo_console::warn!(format!("animations disabled: {}", dom::describe(&e)));
                return;
            }
        };
    callback.forget();

    for el in dom::query_all(&config.animated_selector) {
        observer.observe(&el);
    }
}
