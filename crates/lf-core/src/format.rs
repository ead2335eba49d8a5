//! Indian-locale number formatting (`en-IN`: last three digits, then pairs).

pub const RUPEE: char = '₹';

/// `5_00_000.0` → `"5,00,000.00"`.
pub fn group_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{}.{fraction}", group_digits(whole))
}

/// Currency string with the rupee sign, e.g. `"₹23,072.46"`.
pub fn format_currency(amount: f64) -> String {
    format!("{RUPEE}{}", group_amount(amount))
}

fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}
