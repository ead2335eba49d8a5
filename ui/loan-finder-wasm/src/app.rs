//! Page-session state.
//!
//! One `App` is built at startup and cloned (as `Rc<App>`) into every event
//! handler and exported function. WASM is single-threaded, so interior
//! mutability via `RefCell` is all the coordination needed.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use lf_core::{Controller, Notice, TaskKey, TaskSlots, UiConfig};
use web_sys::HtmlScriptElement;

use crate::dom;
use crate::view::DomView;

/// `<script id="loanFinderConfig" type="application/json">` override block.
pub const CONFIG_SCRIPT_ID: &str = "loanFinderConfig";

pub struct App {
    config: UiConfig,
    controller: RefCell<Controller<DomView>>,
    tasks: Rc<RefCell<TaskSlots<Timeout>>>,
}

impl App {
    pub fn new(config: UiConfig) -> Rc<Self> {
        let tasks = Rc::new(RefCell::new(TaskSlots::new()));
        let view = DomView::new(&config, Rc::clone(&tasks));
        Rc::new(Self {
            controller: RefCell::new(Controller::new(view, &config)),
            config,
            tasks,
        })
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Run `f` with exclusive access to the controller.
    pub fn with_controller<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Controller<DomView>) -> R,
    {
        f(&mut self.controller.borrow_mut())
    }

    pub fn notify(&self, notice: &Notice) {
        self.with_controller(|c| c.notify(notice));
    }

    /// Schedule `task` under `key`, cancelling whatever was pending there.
    pub fn debounce<F>(&self, key: TaskKey, delay_ms: u32, task: F)
    where
        F: FnOnce() + 'static,
    {
        let tasks = Rc::clone(&self.tasks);
        let timeout = Timeout::new(delay_ms, move || {
            drop(tasks.borrow_mut().take(key));
            task();
        });
        // Dropping a pending `Timeout` clears it.
        drop(self.tasks.borrow_mut().replace(key, timeout));
    }
}

/// Read the page's config block. A missing block means defaults; a broken
/// one is reported and ignored.
pub fn load_config() -> UiConfig {
    let Some(script) = dom::by_id_typed::<HtmlScriptElement>(CONFIG_SCRIPT_ID) else {
        return UiConfig::default();
    };
    let raw = script.text().unwrap_or_default();
    if raw.trim().is_empty() {
        return UiConfig::default();
    }
    UiConfig::from_json(&raw).unwrap_or_else(|err| {
        gloo_console::warn!(format!("ignoring #{CONFIG_SCRIPT_ID}: {err}"));
        UiConfig::default()
    })
}
