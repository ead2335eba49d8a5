//! Transient user notifications.

use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Accepts the type names page scripts pass to `showNotification`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" | "danger" => Severity::Error,
            _ => Severity::Info,
        }
    }

    /// Bootstrap contextual class for the banner.
    pub fn alert_class(self) -> &'static str {
        match self {
            Severity::Info => "alert-info",
            Severity::Success => "alert-success",
            Severity::Warning => "alert-warning",
            Severity::Error => "alert-danger",
        }
    }
}

pub const FORM_INVALID: &str = "Please fill all required fields correctly";
pub const COMPARE_ADDED: &str = "Loan added to comparison";
pub const LINK_COPIED: &str = "Link copied to clipboard!";
pub const LINK_COPY_FAILED: &str = "Failed to copy link";
pub const DETAILS_COPIED: &str = "Loan details copied!";
pub const DETAILS_COPY_FAILED: &str = "Failed to copy loan details";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: Cow<'static, str>,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<Cow<'static, str>>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn warning(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn error(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn compare_limit(capacity: usize) -> Self {
        Self::warning(format!("You can compare maximum {capacity} loans"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_names() {
        assert_eq!(Severity::from_name("error"), Severity::Error);
        assert_eq!(Severity::from_name("Danger"), Severity::Error);
        assert_eq!(Severity::from_name("success"), Severity::Success);
        assert_eq!(Severity::from_name("whatever"), Severity::Info);
        assert_eq!(Severity::Error.alert_class(), "alert-danger");
    }

    #[test]
    fn compare_limit_mentions_capacity() {
        let notice = Notice::compare_limit(3);
        assert_eq!(notice.message, "You can compare maximum 3 loans");
        assert_eq!(notice.severity, Severity::Warning);
    }
}
