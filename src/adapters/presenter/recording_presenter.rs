//! Presenter that records every call, for assertions in tests and for
//! headless runs that inspect output afterwards.

use std::sync::{Arc, Mutex};

use crate::domain::dashboard::{ChatMessage, View};
use crate::domain::gap_analysis::{ComparisonRow, GapAssessment};
use crate::domain::simulation::ImpactSeries;
use crate::ports::DashboardPresenter;

/// One recorded presenter call.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterCall {
    ShowView(View),
    ImpactChart(ImpactSeries),
    GapChart {
        assessment: GapAssessment,
        required: GapAssessment,
    },
    ComparisonTable(Vec<ComparisonRow>),
    ControlLabel { control: String, text: String },
    Message(ChatMessage),
    Alert(String),
}

#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    calls: Arc<Mutex<Vec<PresenterCall>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<PresenterCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn messages(&self) -> Vec<String> {
        self.collect(|c| match c {
            PresenterCall::Message(m) => Some(m.text.clone()),
            _ => None,
        })
    }

    pub fn alerts(&self) -> Vec<String> {
        self.collect(|c| match c {
            PresenterCall::Alert(a) => Some(a.clone()),
            _ => None,
        })
    }

    pub fn views(&self) -> Vec<View> {
        self.collect(|c| match c {
            PresenterCall::ShowView(v) => Some(*v),
            _ => None,
        })
    }

    pub fn impact_charts(&self) -> Vec<ImpactSeries> {
        self.collect(|c| match c {
            PresenterCall::ImpactChart(s) => Some(s.clone()),
            _ => None,
        })
    }

    /// The most recent comparison table contents.
    pub fn last_table(&self) -> Option<Vec<ComparisonRow>> {
        self.collect(|c| match c {
            PresenterCall::ComparisonTable(rows) => Some(rows.clone()),
            _ => None,
        })
        .pop()
    }

    fn collect<T>(&self, f: impl Fn(&PresenterCall) -> Option<T>) -> Vec<T> {
        self.calls.lock().unwrap().iter().filter_map(f).collect()
    }

    fn record(&self, call: PresenterCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl DashboardPresenter for RecordingPresenter {
    fn show_view(&self, view: View) {
        self.record(PresenterCall::ShowView(view));
    }

    fn render_impact_chart(&self, series: &ImpactSeries) {
        self.record(PresenterCall::ImpactChart(series.clone()));
    }

    fn render_gap_chart(&self, assessment: &GapAssessment, required: &GapAssessment) {
        self.record(PresenterCall::GapChart {
            assessment: assessment.clone(),
            required: required.clone(),
        });
    }

    fn render_comparison_table(&self, rows: &[ComparisonRow]) {
        self.record(PresenterCall::ComparisonTable(rows.to_vec()));
    }

    fn update_control_label(&self, control: &str, text: &str) {
        self.record(PresenterCall::ControlLabel {
            control: control.to_string(),
            text: text.to_string(),
        });
    }

    fn append_message(&self, message: &ChatMessage) {
        self.record(PresenterCall::Message(message.clone()));
    }

    fn alert(&self, text: &str) {
        self.record(PresenterCall::Alert(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let presenter = RecordingPresenter::new();
        presenter.show_view(View::Comparison);
        presenter.append_message(&ChatMessage::agent("hello"));
        presenter.alert("careful");

        assert_eq!(presenter.calls().len(), 3);
        assert_eq!(presenter.views(), vec![View::Comparison]);
        assert_eq!(presenter.messages(), vec!["hello".to_string()]);
        assert_eq!(presenter.alerts(), vec!["careful".to_string()]);
    }

    #[test]
    fn last_table_returns_latest_render() {
        let presenter = RecordingPresenter::new();
        assert!(presenter.last_table().is_none());

        presenter.render_comparison_table(&[]);
        assert_eq!(presenter.last_table(), Some(vec![]));

        presenter.clear();
        assert!(presenter.calls().is_empty());
    }
}
