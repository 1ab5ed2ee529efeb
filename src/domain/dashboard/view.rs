//! Views, agent status and source documents.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Top-level dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Comparison,
    Simulation,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Comparison => "comparison",
            View::Simulation => "simulation",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the AI agent is brought online.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectMode {
    /// Real provider built from a user-supplied credential.
    Live,
    /// Sample environment; no credential, no AI calls.
    Sample,
}

/// Lifecycle of the AI agent connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    #[default]
    Offline,
    Initializing,
    /// Live provider available.
    Online,
    /// Sample environment active.
    Demo,
}

impl AgentStatus {
    /// Status text for the header badge.
    pub fn badge(&self) -> &'static str {
        match self {
            AgentStatus::Offline => "Offline",
            AgentStatus::Initializing => "Initializing",
            AgentStatus::Online => "Active (Online)",
            AgentStatus::Demo => "Demo Mode",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, AgentStatus::Online | AgentStatus::Demo)
    }
}

impl StateMachine for AgentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AgentStatus::*;
        matches!(
            (self, target),
            (Offline, Initializing)
                | (Initializing, Online)
                | (Initializing, Demo)
                | (Initializing, Offline)
                | (Online, Initializing)
                | (Demo, Initializing)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AgentStatus::*;
        match self {
            Offline => vec![Initializing],
            Initializing => vec![Online, Demo, Offline],
            Online | Demo => vec![Initializing],
        }
    }
}

/// Where a source document was picked up from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentOrigin {
    Drive,
    Sample,
    Upload,
}

impl DocumentOrigin {
    pub fn tag(&self) -> &'static str {
        match self {
            DocumentOrigin::Drive => "G-Drive",
            DocumentOrigin::Sample => "Sim",
            DocumentOrigin::Upload => "Upload",
        }
    }
}

/// A standards text or company report listed in the source panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDocument {
    pub name: String,
    pub origin: DocumentOrigin,
    pub ready: bool,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, origin: DocumentOrigin) -> Self {
        Self {
            name: name.into(),
            origin,
            ready: true,
        }
    }
}

impl fmt::Display for SourceDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.origin.tag(), self.name)
    }
}

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Agent,
    User,
}

/// An entry in the agent chat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Agent,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_status_allows_reconnect_from_active_states() {
        assert!(AgentStatus::Online.can_transition_to(&AgentStatus::Initializing));
        assert!(AgentStatus::Demo.can_transition_to(&AgentStatus::Initializing));
        assert!(!AgentStatus::Offline.can_transition_to(&AgentStatus::Online));
        assert!(AgentStatus::Initializing.transition_to(AgentStatus::Initializing).is_err());
    }

    #[test]
    fn agent_status_transitions_are_consistent() {
        for status in [
            AgentStatus::Offline,
            AgentStatus::Initializing,
            AgentStatus::Online,
            AgentStatus::Demo,
        ] {
            for target in status.valid_transitions() {
                assert!(status.can_transition_to(&target));
            }
            assert!(!status.is_terminal());
        }
    }

    #[test]
    fn source_document_display_includes_origin_tag() {
        let doc = SourceDocument::new("ssbj_standards_v1.pdf", DocumentOrigin::Drive);
        assert_eq!(doc.to_string(), "[G-Drive] ssbj_standards_v1.pdf");
    }
}
