use std::fmt;

use thiserror::Error;

use crate::notice::Severity;

/// Calculator form fields, named after their DOM ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Principal,
    Tenure,
    Rate,
}

impl Field {
    pub fn element_id(self) -> &'static str {
        match self {
            Field::Principal => "loanAmount",
            Field::Tenure => "loanTenure",
            Field::Rate => "interestRate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{0} is empty")]
    Missing(Field),

    #[error("{0} is not a number")]
    NotANumber(Field),

    #[error("{0} must be greater than zero")]
    NonPositive(Field),

    #[error("interest rate cannot be negative")]
    NegativeRate,

    /// The repayment total does not fit in an `f64`.
    #[error("{0} is too large to repay")]
    TooLarge(Field),
}

impl InputError {
    pub fn severity(&self) -> Severity {
        match self {
            InputError::Missing(_) | InputError::NotANumber(_) => Severity::Warning,
            InputError::NonPositive(_) | InputError::NegativeRate | InputError::TooLarge(_) => {
                Severity::Error
            }
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self.severity() {
            Severity::Warning => "Please fill all calculator fields",
            _ => "Please enter valid positive numbers",
        }
    }
}

/// Browser facilities whose calls can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Dom,
    Clipboard,
    Share,
    Bootstrap,
    IntersectionObserver,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Dom => "DOM",
            Capability::Clipboard => "clipboard",
            Capability::Share => "share",
            Capability::Bootstrap => "bootstrap",
            Capability::IntersectionObserver => "IntersectionObserver",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoanError {
    #[error("missing element {0}")]
    MissingElement(String),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("{capability} failed: {reason}")]
    Platform {
        capability: Capability,
        reason: String,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl LoanError {
    pub fn missing(selector: impl Into<String>) -> Self {
        LoanError::MissingElement(selector.into())
    }

    pub fn platform(capability: Capability, reason: impl Into<String>) -> Self {
        LoanError::Platform {
            capability,
            reason: reason.into(),
        }
    }
}
