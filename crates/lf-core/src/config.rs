//! Page-level UI settings.
//!
//! Every field has a default, so a page may override any subset through a
//! JSON block; see [`UiConfig::from_json`].

use serde::Deserialize;
use tracing::debug;

use crate::compare::{CompareList, DEFAULT_CAPACITY, DEFAULT_MIN_SELECTION};
use crate::error::LoanError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    pub alert_dismiss_ms: u32,
    pub notice_dismiss_ms: u32,
    pub search_debounce_ms: u32,
    pub back_to_top_offset: f64,
    pub compare_capacity: usize,
    pub compare_min_selection: usize,
    pub animation_threshold: f64,
    pub animation_root_margin: String,
    pub animated_selector: String,
    pub notice_container: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: 5_000,
            notice_dismiss_ms: 3_000,
            search_debounce_ms: 500,
            back_to_top_offset: 300.0,
            compare_capacity: DEFAULT_CAPACITY,
            compare_min_selection: DEFAULT_MIN_SELECTION,
            animation_threshold: 0.1,
            animation_root_margin: "0px 0px -50px 0px".to_string(),
            animated_selector: ".loan-card, .loan-type-card, .card, section".to_string(),
            notice_container: ".container".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(raw: &str) -> Result<Self, LoanError> {
        let config: UiConfig =
            serde_json::from_str(raw).map_err(|e| LoanError::Config(e.to_string()))?;
        config.validate()?;
        debug!(?config, "page config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LoanError> {
        if self.compare_capacity == 0 {
            return Err(LoanError::Config("compare_capacity must be at least 1".into()));
        }
        if self.compare_min_selection > self.compare_capacity {
            return Err(LoanError::Config(format!(
                "compare_min_selection {} exceeds compare_capacity {}",
                self.compare_min_selection, self.compare_capacity
            )));
        }
        if self.alert_dismiss_ms == 0
            || self.notice_dismiss_ms == 0
            || self.search_debounce_ms == 0
        {
            return Err(LoanError::Config("timer delays must be non-zero".into()));
        }
        if !(0.0..=1.0).contains(&self.animation_threshold) {
            return Err(LoanError::Config(format!(
                "animation_threshold {} outside [0, 1]",
                self.animation_threshold
            )));
        }
        Ok(())
    }

    pub fn compare_list(&self) -> CompareList {
        CompareList::new(self.compare_capacity, self.compare_min_selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = UiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.compare_list().capacity(), 3);
    }

    #[test]
    fn partial_override() {
        let config = UiConfig::from_json(r#"{ "notice_dismiss_ms": 1500 }"#).unwrap();
        assert_eq!(config.notice_dismiss_ms, 1500);
        assert_eq!(config.alert_dismiss_ms, 5_000);
    }

    #[test]
    fn rejects_inconsistent_compare_limits() {
        let err = UiConfig::from_json(r#"{ "compare_capacity": 2, "compare_min_selection": 3 }"#)
            .unwrap_err();
        assert!(matches!(err, LoanError::Config(_)));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(UiConfig::from_json(r#"{ "compare_cap": 4 }"#).is_err());
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        assert!(UiConfig::from_json(r#"{ "animation_threshold": 2.0 }"#).is_err());
        assert!(UiConfig::from_json("{ nope").is_err());
    }
}
