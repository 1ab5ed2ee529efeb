use std::time::Duration;

use crate::domain::dashboard::{DashboardEvent, View};
use crate::domain::gap_analysis::GapAssessment;

/// One thing the demo does to the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoAction {
    Say(String),
    UpdateGapAssessment(GapAssessment),
    SwitchView(View),
}

impl DemoAction {
    pub fn say(text: impl Into<String>) -> Self {
        DemoAction::Say(text.into())
    }

    /// The dashboard event this action dispatches.
    pub fn into_event(self) -> DashboardEvent {
        match self {
            DemoAction::Say(text) => DashboardEvent::AgentSays(text),
            DemoAction::UpdateGapAssessment(a) => DashboardEvent::UpdateGapAssessment(a),
            DemoAction::SwitchView(view) => DashboardEvent::Navigate(view),
        }
    }
}

/// An action and how long to wait before running it.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoStep {
    pub delay: Duration,
    pub action: DemoAction,
}

impl DemoStep {
    pub fn new(delay_ms: u64, action: DemoAction) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            action,
        }
    }

    /// Runs right after the previous step.
    pub fn immediately(action: DemoAction) -> Self {
        Self::new(0, action)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DemoScript {
    steps: Vec<DemoStep>,
}

impl DemoScript {
    pub fn new(steps: Vec<DemoStep>) -> Self {
        Self { steps }
    }

    /// The built-in walkthrough: load a sample report, score it, show the
    /// comparison, then open the simulator.
    pub fn standard() -> Self {
        Self::new(vec![
            DemoStep::immediately(DemoAction::say(
                "Loading sample data (securities report)...",
            )),
            DemoStep::new(
                2000,
                DemoAction::say("Analysis complete. Disclosure gaps found in 4 items."),
            ),
            DemoStep::immediately(DemoAction::UpdateGapAssessment(GapAssessment::demo_result())),
            DemoStep::immediately(DemoAction::say(
                "The SSBJ compliance map has been updated. Financial impact disclosure \
                 is the weakest area.",
            )),
            DemoStep::new(1500, DemoAction::SwitchView(View::Comparison)),
            DemoStep::immediately(DemoAction::say(
                "Comparing the current disclosure with the SSBJ draft...",
            )),
            DemoStep::new(2000, DemoAction::SwitchView(View::Simulation)),
            DemoStep::immediately(DemoAction::say(
                "Financial impact simulation is ready. Adjust the carbon price to see \
                 the effect on profit.",
            )),
        ])
    }

    pub fn steps(&self) -> &[DemoStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of all step delays before pacing is applied.
    pub fn total_delay(&self) -> Duration {
        self.steps.iter().map(|s| s.delay).sum()
    }
}

impl IntoIterator for DemoScript {
    type Item = DemoStep;
    type IntoIter = std::vec::IntoIter<DemoStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}
