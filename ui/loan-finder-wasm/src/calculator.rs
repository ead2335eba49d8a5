//! EMI calculator form.
//!
//! Inputs are re-read on every call; nothing about a previous calculation is
//! kept.

use lf_core::emi::{self, RawLoanInput};
use lf_core::format;
use lf_core::{Controller, Field, LoanError};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

use crate::app::App;
use crate::dom;
use crate::view::DomView;

pub const AMOUNT_DISPLAY_ID: &str = "amountDisplay";

fn field_value(field: Field) -> Result<String, LoanError> {
    dom::require::<HtmlInputElement>(field.element_id()).map(|input| input.value())
}

pub fn read_inputs() -> Result<RawLoanInput, LoanError> {
    Ok(RawLoanInput {
        principal: field_value(Field::Principal)?,
        tenure: field_value(Field::Tenure)?,
        rate: field_value(Field::Rate)?,
    })
}

// Console record of a finished calculation, amounts as fixed-point strings.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CalculationLog {
    principal: f64,
    tenure: String,
    rate: String,
    emi: String,
    total_payment: String,
    total_interest: String,
}

/// `calculateEMI()`: validate, render and log.
pub fn calculate_emi(app: &App) {
    gloo_console::log!("Calculating EMI...");

    let raw = match read_inputs() {
        Ok(raw) => raw,
        Err(err) => {
            gloo_console::error!(format!("EMI calculator inputs not found: {err}"));
            return;
        }
    };

    let Some(breakdown) = app.with_controller(|c| c.calculate(&raw)) else {
        return;
    };

    let record = CalculationLog {
        principal: breakdown.principal,
        tenure: raw.tenure.trim().to_string(),
        rate: raw.rate.trim().to_string(),
        emi: format!("{:.2}", breakdown.monthly_payment),
        total_payment: format!("{:.2}", breakdown.total_payment),
        total_interest: format!("{:.2}", breakdown.total_interest),
    };
    match serde_wasm_bindgen::to_value(&record) {
        Ok(value) => gloo_console::log!("EMI Calculated:", value),
        Err(_) => gloo_console::log!(format!("EMI Calculated: {}", record.emi)),
    }
}

/// `calculateEMIDetailed()`: the breakdown object, or `undefined` when the
/// form is incomplete. Never notifies.
pub fn calculate_emi_detailed() -> JsValue {
    let Some(breakdown) = read_inputs()
        .ok()
        .and_then(|raw| Controller::<DomView>::breakdown(&raw))
    else {
        return JsValue::UNDEFINED;
    };
    match serde_wasm_bindgen::to_value(&breakdown) {
        Ok(value) => {
            web_sys::console::table_1(&value);
            value
        }
        Err(err) => {
            gloo_console::error!(format!("breakdown not serializable: {err}"));
            JsValue::UNDEFINED
        }
    }
}

/// `updateAmountFromSlider(value)`: mirror a range slider into the amount
/// field and its formatted display.
pub fn update_amount_from_slider(value: &JsValue) {
    let text = value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
        .unwrap_or_default();

    let Some(input) = dom::by_id_typed::<HtmlInputElement>(Field::Principal.element_id()) else {
        return;
    };
    input.set_value(&text);

    if let Some(display) = dom::by_id(AMOUNT_DISPLAY_ID) {
        let amount = emi::parse_leading(&text).unwrap_or(f64::NAN);
        dom::set_text(&display, &format::format_currency(amount));
    }
}
