//! Equated monthly installment math.
//!
//! Totals are always derived from the unrounded monthly payment; rounding
//! happens only when a value is formatted for display.

use serde::Serialize;

use crate::error::{Field, InputError};
use crate::format;

/// Raw calculator field values as read from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLoanInput {
    pub principal: String,
    pub tenure: String,
    pub rate: String,
}

impl RawLoanInput {
    pub fn new(
        principal: impl Into<String>,
        tenure: impl Into<String>,
        rate: impl Into<String>,
    ) -> Self {
        Self {
            principal: principal.into(),
            tenure: tenure.into(),
            rate: rate.into(),
        }
    }
}

/// A validated loan snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanInput {
    principal: f64,
    tenure_months: u32,
    annual_rate_percent: f64,
}

impl LoanInput {
    pub fn new(
        principal: f64,
        tenure_months: u32,
        annual_rate_percent: f64,
    ) -> Result<Self, InputError> {
        if !principal.is_finite() {
            return Err(InputError::NotANumber(Field::Principal));
        }
        if !annual_rate_percent.is_finite() {
            return Err(InputError::NotANumber(Field::Rate));
        }
        if principal <= 0.0 {
            return Err(InputError::NonPositive(Field::Principal));
        }
        if tenure_months == 0 {
            return Err(InputError::NonPositive(Field::Tenure));
        }
        if annual_rate_percent < 0.0 {
            return Err(InputError::NegativeRate);
        }
        let input = Self {
            principal,
            tenure_months,
            annual_rate_percent,
        };
        if !input.breakdown().total_payment.is_finite() {
            return Err(InputError::TooLarge(Field::Principal));
        }
        Ok(input)
    }

    /// Parse form values. Every field is checked for presence before any is
    /// checked for range, so a blank field always reports as missing.
    pub fn parse(raw: &RawLoanInput) -> Result<Self, InputError> {
        let fields = [
            (Field::Principal, raw.principal.trim()),
            (Field::Tenure, raw.tenure.trim()),
            (Field::Rate, raw.rate.trim()),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| v.is_empty()) {
            return Err(InputError::Missing(*field));
        }

        let principal =
            parse_leading(fields[0].1).ok_or(InputError::NotANumber(Field::Principal))?;
        let tenure = parse_leading(fields[1].1).ok_or(InputError::NotANumber(Field::Tenure))?;
        let rate = parse_leading(fields[2].1).ok_or(InputError::NotANumber(Field::Rate))?;

        // Tenure counts whole installments; a fractional entry truncates.
        let tenure = tenure.trunc();
        if tenure < 1.0 {
            return Err(InputError::NonPositive(Field::Tenure));
        }
        let tenure_months = if tenure > f64::from(u32::MAX) {
            u32::MAX
        } else {
            tenure as u32
        };

        Self::new(principal, tenure_months, rate)
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn tenure_months(&self) -> u32 {
        self.tenure_months
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / (12.0 * 100.0)
    }

    pub fn breakdown(&self) -> EmiBreakdown {
        let n = f64::from(self.tenure_months);
        let monthly_payment =
            monthly_payment(self.principal, self.tenure_months, self.monthly_rate());
        let total_payment = monthly_payment * n;
        EmiBreakdown {
            monthly_payment,
            total_payment,
            total_interest: total_payment - self.principal,
            principal: self.principal,
        }
    }
}

/// `P·r·(1+r)^n / ((1+r)^n − 1)`, evaluated as `P·r / (1 − (1+r)^−n)` with
/// `1 − (1+r)^−n` computed as `-expm1(−n·ln1p(r))`. Long tenures do not
/// overflow and rates too small to move `1 + r` still converge on `P / n`.
/// A zero rate amortizes linearly.
pub fn monthly_payment(principal: f64, tenure_months: u32, monthly_rate: f64) -> f64 {
    let n = f64::from(tenure_months);
    if monthly_rate == 0.0 {
        return principal / n;
    }
    let paid_down = -(-n * monthly_rate.ln_1p()).exp_m1();
    principal * monthly_rate / paid_down
}

/// Leading decimal number of `s`, ignoring leading whitespace and trailing
/// junk (`"12.5abc"` → 12.5, `"5e5x"` → 500000). `None` when no digits lead
/// the text.
pub fn parse_leading(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut digits = 0;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = bytes[exp_end..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    s[..end].parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmiBreakdown {
    #[serde(rename = "monthlyEMI")]
    pub monthly_payment: f64,
    #[serde(rename = "totalPayment")]
    pub total_payment: f64,
    #[serde(rename = "totalInterest")]
    pub total_interest: f64,
    #[serde(rename = "principalAmount")]
    pub principal: f64,
}

impl EmiBreakdown {
    /// Monthly payment with en-IN grouping and two decimals, no currency sign.
    pub fn monthly_display(&self) -> String {
        format::group_amount(self.monthly_payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(p: f64, n: u32, r: f64) -> LoanInput {
        LoanInput::new(p, n, r).expect("valid input")
    }

    #[test]
    fn worked_example_matches_formula() {
        let b = input(500_000.0, 24, 10.0).breakdown();
        assert!((b.monthly_payment - 23_072.463_168_758).abs() < 1e-6);
        assert_eq!(format!("{:.2}", b.total_payment), "553739.12");
        assert_eq!(format!("{:.2}", b.total_interest), "53739.12");
        assert_eq!(b.monthly_display(), "23,072.46");
    }

    #[test]
    fn zero_rate_is_linear() {
        let b = input(120_000.0, 12, 0.0).breakdown();
        assert_eq!(b.monthly_payment, 10_000.0);
        assert_eq!(b.total_interest, 0.0);
    }

    #[test]
    fn very_long_tenure_stays_finite() {
        let b = input(1_000_000.0, u32::MAX, 12.0).breakdown();
        assert!(b.monthly_payment.is_finite());
        assert!((b.monthly_payment - 10_000.0).abs() < 1e-6);
    }

    #[test]
    fn sub_epsilon_rate_converges_on_linear_payment() {
        let raw = RawLoanInput::new("100000", "12", "0.0000000000000001");
        let b = LoanInput::parse(&raw).unwrap().breakdown();
        assert!(b.monthly_payment.is_finite());
        assert!(b.total_payment.is_finite());
        assert!((b.monthly_payment - 100_000.0 / 12.0).abs() < 1e-9);
        assert_eq!(b.monthly_display(), "8,333.33");
    }

    #[test]
    fn tiny_rate_keeps_precision() {
        let raw = RawLoanInput::new("100000", "12", "0.00000001");
        let b = LoanInput::parse(&raw).unwrap().breakdown();
        // First-order expansion: P/n · (1 + r(n+1)/2) with r = 1e-8 / 1200.
        let r = 1e-8 / 1200.0;
        let expected = 100_000.0 / 12.0 * (1.0 + r * 13.0 / 2.0);
        assert!((b.monthly_payment - expected).abs() < 1e-8);
        assert!(b.monthly_payment > 100_000.0 / 12.0);
    }

    #[test]
    fn principal_whose_total_overflows_is_rejected() {
        // 1.7e308 fits an f64; its 24-month total at 10% does not.
        let huge = format!("17{}", "0".repeat(307));
        let raw = RawLoanInput::new(huge, "24", "10");
        assert_eq!(LoanInput::parse(&raw), Err(InputError::TooLarge(Field::Principal)));
        assert!(LoanInput::new(f64::MAX / 2.0, 1, 0.0).is_ok());
    }

    #[test]
    fn blank_tenure_is_missing() {
        let raw = RawLoanInput::new("500000", "  ", "10");
        assert_eq!(LoanInput::parse(&raw), Err(InputError::Missing(Field::Tenure)));
    }

    #[test]
    fn missing_wins_over_invalid() {
        let raw = RawLoanInput::new("-5", "12", "");
        assert_eq!(LoanInput::parse(&raw), Err(InputError::Missing(Field::Rate)));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let cases = [
            (RawLoanInput::new("0", "12", "10"), InputError::NonPositive(Field::Principal)),
            (RawLoanInput::new("1000", "0", "10"), InputError::NonPositive(Field::Tenure)),
            (RawLoanInput::new("1000", "0.5", "10"), InputError::NonPositive(Field::Tenure)),
            (RawLoanInput::new("1000", "12", "-1"), InputError::NegativeRate),
            (RawLoanInput::new("abc", "12", "10"), InputError::NotANumber(Field::Principal)),
        ];
        for (raw, expected) in cases {
            assert_eq!(LoanInput::parse(&raw), Err(expected), "{raw:?}");
        }
    }

    #[test]
    fn parse_accepts_zero_rate_and_truncates_tenure() {
        let parsed = LoanInput::parse(&RawLoanInput::new("1000", "12.9", "0")).unwrap();
        assert_eq!(parsed.tenure_months(), 12);
        assert_eq!(parsed.annual_rate_percent(), 0.0);
    }

    #[test]
    fn parse_leading_ignores_trailing_text() {
        assert_eq!(parse_leading("12.5abc"), Some(12.5));
        assert_eq!(parse_leading("7."), Some(7.0));
        assert_eq!(parse_leading(".5"), Some(0.5));
        assert_eq!(parse_leading("-3"), Some(-3.0));
        assert_eq!(parse_leading("."), None);
        assert_eq!(parse_leading("x1"), None);
        assert_eq!(parse_leading("1,000"), Some(1.0));
        assert_eq!(parse_leading("  5e5x"), Some(500_000.0));
        assert_eq!(parse_leading("2E-1"), Some(0.2));
        assert_eq!(parse_leading("3e"), Some(3.0));
    }

    #[test]
    fn breakdown_serializes_with_page_field_names() {
        let json = serde_json::to_value(input(1200.0, 12, 0.0).breakdown()).unwrap();
        assert_eq!(json["monthlyEMI"], 100.0);
        assert_eq!(json["principalAmount"], 1200.0);
        assert!(json.get("totalInterest").is_some());
    }

    proptest! {
        #[test]
        fn totals_derive_from_unrounded_payment(
            p in 1.0f64..10_000_000.0,
            n in 1u32..=480,
            r in 0.0f64..40.0,
        ) {
            let b = input(p, n, r).breakdown();
            prop_assert!(b.monthly_payment.is_finite());
            prop_assert_eq!(b.total_payment, b.monthly_payment * f64::from(n));
            prop_assert_eq!(b.total_interest, b.total_payment - p);
        }

        #[test]
        fn tiny_rates_stay_finite_and_near_linear(
            p in 1.0f64..10_000_000.0,
            n in 1u32..=480,
            r in (1.0f64..10.0, -20i32..-6).prop_map(|(m, e)| m * 10f64.powi(e)),
        ) {
            let b = input(p, n, r).breakdown();
            let linear = p / f64::from(n);
            prop_assert!(b.monthly_payment.is_finite());
            prop_assert!(b.monthly_payment >= linear * (1.0 - 1e-12));
            prop_assert!((b.monthly_payment - linear) / linear < 1e-6);
            prop_assert_eq!(b.total_payment, b.monthly_payment * f64::from(n));
        }

        #[test]
        fn payment_grows_with_principal(
            p in 1_000.0f64..1_000_000.0,
            extra in 1.0f64..100_000.0,
            n in 1u32..=360,
            r in 0.0f64..30.0,
        ) {
            let low = input(p, n, r).breakdown().monthly_payment;
            let high = input(p + extra, n, r).breakdown().monthly_payment;
            prop_assert!(high > low);
        }

        #[test]
        fn payment_shrinks_with_tenure(
            p in 1_000.0f64..1_000_000.0,
            n in 1u32..=360,
            r in 0.5f64..30.0,
        ) {
            let shorter = input(p, n, r).breakdown().monthly_payment;
            let longer = input(p, n + 1, r).breakdown().monthly_payment;
            prop_assert!(longer < shorter);
        }
    }
}
