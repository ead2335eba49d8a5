//! Contact field patterns used by the enquiry forms.

use std::sync::LazyLock;

use regex::Regex;

// Indian mobile numbers: ten digits starting 6-9.
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("phone pattern compiles"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE.is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Strip everything except ASCII digits and `.` from a numeric input.
pub fn sanitize_numeric(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}
