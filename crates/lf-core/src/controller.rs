//! Page-session controller.
//!
//! One [`Controller`] is built per page and shared with every event handler.
//! All rendering goes through [`View`], so the calculator and comparison flows
//! run unchanged in tests.

use tracing::debug;

use crate::compare::{AddOutcome, CompareButton, CompareList};
use crate::config::UiConfig;
use crate::emi::{EmiBreakdown, LoanInput, RawLoanInput};
use crate::notice::{self, Notice};

/// Presentation capability implemented by the DOM layer.
pub trait View {
    /// Write the formatted payment, reveal the result panel and scroll to it.
    fn show_emi(&mut self, breakdown: &EmiBreakdown);

    fn notify(&mut self, notice: &Notice);

    fn update_compare_button(&mut self, button: &CompareButton);
}

pub struct Controller<V> {
    view: V,
    compare: CompareList,
}

impl<V: View> Controller<V> {
    pub fn new(view: V, config: &UiConfig) -> Self {
        Self {
            view,
            compare: config.compare_list(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn compare(&self) -> &CompareList {
        &self.compare
    }

    /// Validate, compute and render. Invalid input is reported to the user
    /// and yields `None`.
    pub fn calculate(&mut self, raw: &RawLoanInput) -> Option<EmiBreakdown> {
        match LoanInput::parse(raw) {
            Ok(input) => {
                let breakdown = input.breakdown();
                self.view.show_emi(&breakdown);
                Some(breakdown)
            }
            Err(err) => {
                debug!(%err, "calculator input rejected");
                self.view.notify(&Notice::new(err.user_message(), err.severity()));
                None
            }
        }
    }

    /// Compute without touching the view.
    pub fn breakdown(raw: &RawLoanInput) -> Option<EmiBreakdown> {
        LoanInput::parse(raw).ok().map(|input| input.breakdown())
    }

    pub fn add_to_compare(&mut self, id: impl Into<String>) -> AddOutcome {
        let outcome = self.compare.add(id);
        match outcome {
            AddOutcome::LimitReached => {
                self.view.notify(&Notice::compare_limit(self.compare.capacity()));
            }
            AddOutcome::AlreadyPresent => {}
            AddOutcome::Added => {
                self.view.notify(&Notice::success(notice::COMPARE_ADDED));
                self.view.update_compare_button(&self.compare.button());
            }
        }
        outcome
    }

    pub fn remove_from_compare(&mut self, id: &str) -> bool {
        let removed = self.compare.remove(id);
        self.view.update_compare_button(&self.compare.button());
        removed
    }

    pub fn notify(&mut self, notice: &Notice) {
        self.view.notify(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::Severity;

    #[derive(Default)]
    struct RecordingView {
        results: Vec<EmiBreakdown>,
        notices: Vec<Notice>,
        button: Option<CompareButton>,
    }

    impl View for RecordingView {
        fn show_emi(&mut self, breakdown: &EmiBreakdown) {
            self.results.push(*breakdown);
        }

        fn notify(&mut self, notice: &Notice) {
            self.notices.push(notice.clone());
        }

        fn update_compare_button(&mut self, button: &CompareButton) {
            self.button = Some(button.clone());
        }
    }

    fn controller() -> Controller<RecordingView> {
        Controller::new(RecordingView::default(), &UiConfig::default())
    }

    #[test]
    fn calculate_renders_result() {
        let mut c = controller();
        let b = c
            .calculate(&RawLoanInput::new("500000", "24", "10"))
            .expect("valid input");
        assert_eq!(c.view().results, vec![b]);
        assert!(c.view().notices.is_empty());
        assert_eq!(b.monthly_display(), "23,072.46");
    }

    #[test]
    fn blank_tenure_warns_without_rendering() {
        let mut c = controller();
        assert!(c.calculate(&RawLoanInput::new("500000", "", "10")).is_none());
        assert!(c.view().results.is_empty());
        assert_eq!(
            c.view().notices,
            vec![Notice::warning("Please fill all calculator fields")]
        );
    }

    #[test]
    fn negative_rate_is_an_error() {
        let mut c = controller();
        assert!(c.calculate(&RawLoanInput::new("1000", "12", "-2")).is_none());
        assert_eq!(c.view().notices[0].severity, Severity::Error);
    }

    #[test]
    fn zero_rate_calculates() {
        let mut c = controller();
        let b = c.calculate(&RawLoanInput::new("1200", "12", "0")).unwrap();
        assert_eq!(b.monthly_payment, 100.0);
    }

    #[test]
    fn detailed_breakdown_is_silent() {
        let bad = RawLoanInput::new("x", "1", "1");
        assert!(Controller::<RecordingView>::breakdown(&bad).is_none());
        let good = RawLoanInput::new("1000", "10", "0");
        let b = Controller::<RecordingView>::breakdown(&good).unwrap();
        assert_eq!(b.total_payment, 1000.0);
    }

    #[test]
    fn compare_flow_updates_button_and_notifies() {
        let mut c = controller();
        assert_eq!(c.add_to_compare("1"), AddOutcome::Added);
        assert_eq!(c.add_to_compare("1"), AddOutcome::AlreadyPresent);
        assert_eq!(c.view().notices.len(), 1);
        assert_eq!(c.view().button.as_ref().map(|b| b.enabled), Some(false));

        c.add_to_compare("2");
        c.add_to_compare("3");
        assert_eq!(
            c.view().button,
            Some(CompareButton {
                label: "Compare (3)".into(),
                enabled: true
            })
        );

        assert_eq!(c.add_to_compare("4"), AddOutcome::LimitReached);
        let last = c.view().notices.last().unwrap();
        assert_eq!(last.severity, Severity::Warning);
        assert_eq!(c.compare().len(), 3);
    }

    #[test]
    fn remove_refreshes_button_even_for_non_member() {
        let mut c = controller();
        c.add_to_compare("1");
        c.add_to_compare("2");
        assert!(!c.remove_from_compare("9"));
        assert_eq!(c.view().button.as_ref().unwrap().label, "Compare (2)");
        assert!(c.remove_from_compare("1"));
        assert_eq!(
            c.view().button,
            Some(CompareButton {
                label: "Compare (1)".into(),
                enabled: false
            })
        );
    }
}
