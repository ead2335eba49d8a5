//! Share-sheet payloads, copied loan details and the share → clipboard
//! fallback chain.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::format::RUPEE;
use crate::notice::{self, Notice};

pub const SHARE_TITLE: &str = "Check out this loan";

/// Argument object for `navigator.share`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_loan(loan_name: &str, url: &str) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: format!("I found this great loan: {loan_name}"),
            url: url.to_string(),
        }
    }
}

/// Result of the native share attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeShare {
    Unavailable,
    Shared,
    /// The user closed the share sheet (`AbortError`).
    Dismissed,
    Failed(String),
}

impl NativeShare {
    /// Only an absent or failing share sheet moves on to the clipboard tier.
    pub fn needs_fallback(&self) -> bool {
        matches!(self, NativeShare::Unavailable | NativeShare::Failed(_))
    }
}

/// Final outcome of the whole chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Dismissed,
    Copied,
    CopyFailed(String),
}

impl ShareOutcome {
    pub fn from_native(native: &NativeShare) -> Option<Self> {
        match native {
            NativeShare::Shared => Some(ShareOutcome::Shared),
            NativeShare::Dismissed => Some(ShareOutcome::Dismissed),
            NativeShare::Unavailable | NativeShare::Failed(_) => None,
        }
    }

    pub fn from_copy(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => ShareOutcome::Copied,
            Err(reason) => ShareOutcome::CopyFailed(reason),
        }
    }

    /// Only the clipboard tier talks to the user.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            ShareOutcome::Shared | ShareOutcome::Dismissed => None,
            ShareOutcome::Copied => Some(Notice::success(notice::LINK_COPIED)),
            ShareOutcome::CopyFailed(_) => Some(Notice::error(notice::LINK_COPY_FAILED)),
        }
    }
}

/// Loan summary passed by `copyLoanDetails(info)`. Fields arrive as whatever
/// the template rendered, so numbers and strings are both accepted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanInfo {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub bank: Value,
    #[serde(default)]
    pub rate: Value,
    #[serde(default)]
    pub min_amount: Value,
    #[serde(default)]
    pub max_amount: Value,
}

impl LoanInfo {
    pub fn clipboard_text(&self) -> String {
        format!(
            "Loan: {}\nBank: {}\nInterest Rate: {}%\nAmount: {RUPEE}{} - {RUPEE}{}",
            scalar_text(&self.name),
            scalar_text(&self.bank),
            scalar_text(&self.rate),
            scalar_text(&self.min_amount),
            scalar_text(&self.max_amount),
        )
    }
}

pub fn copy_details_notice(result: &Result<(), String>) -> Notice {
    match result {
        Ok(()) => Notice::success(notice::DETAILS_COPIED),
        Err(_) => Notice::error(notice::DETAILS_COPY_FAILED),
    }
}

// Render a value the way string interpolation on the page would.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "undefined".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
