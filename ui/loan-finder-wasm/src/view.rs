//! DOM-backed [`View`].
//!
//! Notification banners go to the top of the main container and each one
//! owns a removal timer registered in the shared task slots.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use lf_core::compare::CompareButton;
use lf_core::{Capability, EmiBreakdown, LoanError, Notice, TaskSlots, UiConfig, View};
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlButtonElement, HtmlElement, ScrollLogicalPosition};

use crate::dom;

pub const EMI_AMOUNT_ID: &str = "emiAmount";
pub const EMI_RESULT_ID: &str = "emiResult";
pub const COMPARE_BTN_ID: &str = "compareBtn";

pub struct DomView {
    notice_container: String,
    notice_dismiss_ms: u32,
    tasks: Rc<RefCell<TaskSlots<Timeout>>>,
}

impl DomView {
    pub fn new(config: &UiConfig, tasks: Rc<RefCell<TaskSlots<Timeout>>>) -> Self {
        Self {
            notice_container: config.notice_container.clone(),
            notice_dismiss_ms: config.notice_dismiss_ms,
            tasks,
        }
    }

    fn insert_notice(&self, notice: &Notice) -> Result<(), LoanError> {
        let container = dom::query(&self.notice_container)
            .ok_or_else(|| LoanError::missing(self.notice_container.clone()))?;

        let banner = build_banner(notice)?;
        container
            .insert_before(&banner, container.first_child().as_ref())
            .map_err(|e| dom::js_error(Capability::Dom, &e))?;

        let key = self.tasks.borrow_mut().next_notice_key();
        let tasks = Rc::clone(&self.tasks);
        let timeout = Timeout::new(self.notice_dismiss_ms, move || {
            banner.remove();
            drop(tasks.borrow_mut().take(key));
        });
        self.tasks.borrow_mut().replace(key, timeout);
        Ok(())
    }
}

fn build_banner(notice: &Notice) -> Result<Element, LoanError> {
    let to_err = |e: JsValue| dom::js_error(Capability::Dom, &e);

    let banner = dom::create_element("div")?;
    banner.set_class_name(&format!(
        "alert {} alert-dismissible fade show",
        notice.severity.alert_class()
    ));
    banner.set_attribute("role", "alert").map_err(to_err)?;
    banner.append_with_str_1(&notice.message).map_err(to_err)?;

    let close = dom::create_element("button")?;
    close.set_class_name("btn-close");
    close.set_attribute("type", "button").map_err(to_err)?;
    close.set_attribute("data-bs-dismiss", "alert").map_err(to_err)?;
    close.set_attribute("aria-label", "Close").map_err(to_err)?;
    banner.append_child(&close).map_err(to_err)?;

    Ok(banner)
}

impl View for DomView {
    fn show_emi(&mut self, breakdown: &EmiBreakdown) {
        match dom::by_id(EMI_AMOUNT_ID) {
            Some(el) => dom::set_text(&el, &breakdown.monthly_display()),
            None => gloo_console::error!(format!("missing #{EMI_AMOUNT_ID}")),
        }

        let Some(panel) = dom::by_id_typed::<HtmlElement>(EMI_RESULT_ID) else {
            gloo_console::error!(format!("missing #{EMI_RESULT_ID}"));
            return;
        };
        dom::set_style(&panel, "display", "block");
        dom::scroll_into_view(&panel, ScrollLogicalPosition::Nearest);
        dom::add_class(&panel, "animate__animated");
        dom::add_class(&panel, "animate__fadeIn");
    }

    fn notify(&mut self, notice: &Notice) {
        if let Err(err) = self.insert_notice(notice) {
            gloo_console::warn!(format!("notification dropped ({err}): {}", notice.message));
        }
    }

    fn update_compare_button(&mut self, button: &CompareButton) {
        let Some(btn) = dom::by_id_typed::<HtmlButtonElement>(COMPARE_BTN_ID) else {
            gloo_console::error!(format!("missing #{COMPARE_BTN_ID}"));
            return;
        };
        btn.set_text_content(Some(&button.label));
        btn.set_disabled(!button.enabled);
    }
}
