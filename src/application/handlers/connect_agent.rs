//! ConnectAgentHandler - Brings the AI agent online.
//!
//! Live mode builds a provider from the user's credential and lists the
//! drive folder; sample mode only lists the bundled documents.

use std::sync::Arc;

use secrecy::{ExposeSecret, Secret};
use thiserror::Error;
use tokio::time::sleep;
use tracing::info;

use crate::config::PacingConfig;
use crate::domain::dashboard::{ConnectMode, SourceDocument};
use crate::ports::{AIError, AIProvider, AIProviderFactory, CatalogError, SourceCatalog};

#[derive(Debug)]
pub struct ConnectAgentCommand {
    pub mode: ConnectMode,
    /// Drive folder URL or id; live mode only.
    pub folder: Option<String>,
    pub credential: Option<Secret<String>>,
}

/// An established agent connection.
pub struct AgentConnection {
    pub mode: ConnectMode,
    pub standards: Vec<SourceDocument>,
    /// Present only for live connections.
    pub provider: Option<Arc<dyn AIProvider>>,
}

#[derive(Debug, Error)]
pub enum ConnectAgentError {
    #[error("API key is required for a live connection")]
    MissingCredential,

    #[error("No AI provider is configured for live connections")]
    NoProviderFactory,

    #[error("AI provider rejected the connection: {0}")]
    Provider(#[from] AIError),

    #[error("Standards catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),
}

pub struct ConnectAgentHandler {
    catalog: Arc<dyn SourceCatalog>,
    factory: Option<Arc<dyn AIProviderFactory>>,
    pacing: PacingConfig,
}

impl ConnectAgentHandler {
    pub fn new(
        catalog: Arc<dyn SourceCatalog>,
        factory: Option<Arc<dyn AIProviderFactory>>,
        pacing: PacingConfig,
    ) -> Self {
        Self {
            catalog,
            factory,
            pacing,
        }
    }

    pub async fn handle(&self, cmd: ConnectAgentCommand) -> Result<AgentConnection, ConnectAgentError> {
        match cmd.mode {
            ConnectMode::Live => {
                let credential = cmd
                    .credential
                    .filter(|k| !k.expose_secret().trim().is_empty())
                    .ok_or(ConnectAgentError::MissingCredential)?;
                let factory = self
                    .factory
                    .as_ref()
                    .ok_or(ConnectAgentError::NoProviderFactory)?;

                let provider = factory.create(credential).await?;
                sleep(self.pacing.connect_delay()).await;
                let standards = self
                    .catalog
                    .list_standards(ConnectMode::Live, cmd.folder.as_deref())
                    .await?;

                let provider_info = provider.provider_info();
                info!(
                    provider = %provider_info.name,
                    model = %provider_info.model,
                    documents = standards.len(),
                    "AI agent online"
                );
                Ok(AgentConnection {
                    mode: ConnectMode::Live,
                    standards,
                    provider: Some(provider),
                })
            }
            ConnectMode::Sample => {
                sleep(self.pacing.sample_connect_delay()).await;
                let standards = self
                    .catalog
                    .list_standards(ConnectMode::Sample, None)
                    .await?;

                info!(documents = standards.len(), "Sample environment ready");
                Ok(AgentConnection {
                    mode: ConnectMode::Sample,
                    standards,
                    provider: None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockAIProvider, MockAIProviderFactory, SimulatedDriveCatalog};

    fn handler(factory: Option<MockAIProviderFactory>) -> ConnectAgentHandler {
        ConnectAgentHandler::new(
            Arc::new(SimulatedDriveCatalog::new()),
            factory.map(|f| Arc::new(f) as Arc<dyn AIProviderFactory>),
            PacingConfig::immediate(),
        )
    }

    fn live(key: Option<&str>) -> ConnectAgentCommand {
        ConnectAgentCommand {
            mode: ConnectMode::Live,
            folder: Some("https://drive.example/folder".into()),
            credential: key.map(|k| Secret::new(k.to_string())),
        }
    }

    #[tokio::test]
    async fn sample_mode_needs_no_credential() {
        let connection = handler(None)
            .handle(ConnectAgentCommand {
                mode: ConnectMode::Sample,
                folder: None,
                credential: None,
            })
            .await
            .unwrap();

        assert!(connection.provider.is_none());
        assert_eq!(connection.standards.len(), 1);
    }

    #[tokio::test]
    async fn live_mode_creates_provider_and_lists_drive() {
        let factory = MockAIProviderFactory::new(MockAIProvider::new());
        let connection = handler(Some(factory.clone()))
            .handle(live(Some("AIza-key")))
            .await
            .unwrap();

        assert!(connection.provider.is_some());
        assert_eq!(connection.standards.len(), 2);
        assert_eq!(factory.created_count(), 1);
    }

    #[tokio::test]
    async fn live_mode_without_key_fails() {
        let factory = MockAIProviderFactory::new(MockAIProvider::new());
        let result = handler(Some(factory)).handle(live(Some("  "))).await;
        assert!(matches!(result, Err(ConnectAgentError::MissingCredential)));
    }

    #[tokio::test]
    async fn live_mode_without_factory_fails() {
        let result = handler(None).handle(live(Some("AIza-key"))).await;
        assert!(matches!(result, Err(ConnectAgentError::NoProviderFactory)));
    }

    #[tokio::test]
    async fn rejected_key_surfaces_provider_error() {
        let factory = MockAIProviderFactory::new(MockAIProvider::new()).rejecting("bad");
        let result = handler(Some(factory)).handle(live(Some("bad"))).await;
        assert!(matches!(
            result,
            Err(ConnectAgentError::Provider(AIError::AuthenticationFailed))
        ));
    }
}
