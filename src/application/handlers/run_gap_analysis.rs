//! RunGapAnalysisHandler - Produces the old-vs-new comparison rows.
//!
//! Asks the AI provider when one is connected. Any provider or parse failure
//! is logged and replaced by the placeholder rows; the analysis never fails.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::{sleep_until, timeout, Instant};
use tracing::{debug, info, warn};

use crate::config::PacingConfig;
use crate::domain::dashboard::SourceDocument;
use crate::domain::foundation::AnalysisId;
use crate::domain::gap_analysis::{
    parse_response, placeholder_rows, AnalysisSource, ComparisonRow, GapAnalysisPrompt,
    ResponseParseError,
};
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole, RequestMetadata, SourceCatalog};

/// Text used when no standards document can be read.
const STANDARDS_FALLBACK: &str = "Standard Reference";
/// Text used when no company report can be read.
const REPORT_FALLBACK: &str = "Report Text";

pub struct RunGapAnalysisCommand {
    /// `None` skips the AI call and returns placeholder rows.
    pub provider: Option<Arc<dyn AIProvider>>,
    pub standards: Vec<SourceDocument>,
    pub reports: Vec<SourceDocument>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GapAnalysisOutcome {
    pub analysis_id: AnalysisId,
    pub rows: Vec<ComparisonRow>,
    pub source: AnalysisSource,
}

#[derive(Debug, Error)]
enum AiAttemptError {
    #[error(transparent)]
    Provider(#[from] AIError),

    #[error(transparent)]
    Parse(#[from] ResponseParseError),
}

pub struct RunGapAnalysisHandler {
    catalog: Arc<dyn SourceCatalog>,
    pacing: PacingConfig,
    ai_timeout: Duration,
}

impl RunGapAnalysisHandler {
    pub fn new(catalog: Arc<dyn SourceCatalog>, pacing: PacingConfig, ai_timeout: Duration) -> Self {
        Self {
            catalog,
            pacing,
            ai_timeout,
        }
    }

    pub async fn handle(&self, cmd: RunGapAnalysisCommand) -> GapAnalysisOutcome {
        let analysis_id = AnalysisId::new();
        let ready_at = Instant::now() + self.pacing.analysis_delay();

        let (rows, source) = match &cmd.provider {
            Some(provider) => match self.ask_ai(provider.as_ref(), analysis_id, &cmd).await {
                Ok(rows) => (rows, AnalysisSource::Ai),
                Err(e) => {
                    warn!(%analysis_id, error = %e, "AI gap analysis failed, using placeholder rows");
                    (placeholder_rows(), AnalysisSource::Placeholder)
                }
            },
            None => {
                debug!(%analysis_id, "No AI provider connected, using placeholder rows");
                (placeholder_rows(), AnalysisSource::Placeholder)
            }
        };

        sleep_until(ready_at).await;
        info!(%analysis_id, rows = rows.len(), ?source, "Gap analysis complete");

        GapAnalysisOutcome {
            analysis_id,
            rows,
            source,
        }
    }

    async fn ask_ai(
        &self,
        provider: &dyn AIProvider,
        analysis_id: AnalysisId,
        cmd: &RunGapAnalysisCommand,
    ) -> Result<Vec<ComparisonRow>, AiAttemptError> {
        let standards = self.collect_text(&cmd.standards, STANDARDS_FALLBACK).await;
        let reports = self.collect_text(&cmd.reports, REPORT_FALLBACK).await;
        let prompt = GapAnalysisPrompt::build(&standards, &reports);

        let request = CompletionRequest::new(RequestMetadata::new(
            analysis_id,
            format!("gap-analysis-{}", analysis_id),
        ))
        .with_system_prompt(prompt.system)
        .with_message(MessageRole::User, prompt.user)
        .with_temperature(0.2);

        let response = timeout(self.ai_timeout, provider.complete(request))
            .await
            .map_err(|_| AIError::Timeout {
                timeout_secs: whole_seconds(self.ai_timeout),
            })??;

        debug!(%analysis_id, model = %response.model, bytes = response.content.len(), "AI response received");
        Ok(parse_response(&response.content)?)
    }

    /// Concatenates readable documents; unreadable ones are skipped.
    async fn collect_text(&self, documents: &[SourceDocument], fallback: &str) -> String {
        let mut parts = Vec::new();
        for doc in documents {
            match self.catalog.read_text(doc).await {
                Ok(text) => parts.push(text),
                Err(e) => debug!(document = %doc, error = %e, "Skipping unreadable document"),
            }
        }
        if parts.is_empty() {
            fallback.to_string()
        } else {
            parts.join("\n\n")
        }
    }
}

/// Timeout in whole seconds for error reporting, saturating at `u32::MAX`.
fn whole_seconds(duration: Duration) -> u32 {
    u32::try_from(duration.as_secs()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockError;
    use crate::adapters::{MockAIProvider, SimulatedDriveCatalog};
    use crate::domain::dashboard::DocumentOrigin;

    fn handler() -> RunGapAnalysisHandler {
        RunGapAnalysisHandler::new(
            Arc::new(SimulatedDriveCatalog::new()),
            PacingConfig::immediate(),
            Duration::from_secs(60),
        )
    }

    fn ai_rows() -> Vec<ComparisonRow> {
        vec![ComparisonRow::new(
            "Risk management",
            "Risks are reviewed annually.",
            "Climate risks are integrated into enterprise risk management.",
            "SSBJ S2 para. 41",
        )]
    }

    fn command(provider: Option<MockAIProvider>) -> RunGapAnalysisCommand {
        RunGapAnalysisCommand {
            provider: provider.map(|p| Arc::new(p) as Arc<dyn AIProvider>),
            standards: vec![SourceDocument::new(
                "ssbj_standards_v1.pdf",
                DocumentOrigin::Drive,
            )],
            reports: vec![SourceDocument::new("annual_report.pdf", DocumentOrigin::Upload)],
        }
    }

    #[tokio::test]
    async fn uses_ai_rows_when_response_parses() {
        let provider = MockAIProvider::new().with_rows(&ai_rows());

        let outcome = handler().handle(command(Some(provider.clone()))).await;

        assert_eq!(outcome.source, AnalysisSource::Ai);
        assert_eq!(outcome.rows[0].item, "Risk management");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn prompt_includes_document_text_with_fallback_for_unreadable() {
        let provider = MockAIProvider::new().with_rows(&ai_rows());

        handler().handle(command(Some(provider.clone()))).await;

        let call = &provider.get_calls()[0];
        let user = call.last_user_message().unwrap();
        assert!(user.contains("Standard Reference (ssbj_standards_v1.pdf)"));
        assert!(user.contains("Report source: Report Text"));
        assert!(call.system_prompt.as_deref().unwrap().contains("SSBJ"));
    }

    #[tokio::test]
    async fn provider_error_falls_back_to_placeholder() {
        let provider = MockAIProvider::new().with_error(MockError::Unavailable {
            message: "down".into(),
        });

        let outcome = handler().handle(command(Some(provider))).await;

        assert_eq!(outcome.source, AnalysisSource::Placeholder);
        assert_eq!(outcome.rows, placeholder_rows());
    }

    #[tokio::test]
    async fn unparseable_response_falls_back_to_placeholder() {
        let provider = MockAIProvider::new().with_response("I could not produce a table.");

        let outcome = handler().handle(command(Some(provider))).await;

        assert_eq!(outcome.source, AnalysisSource::Placeholder);
    }

    #[tokio::test]
    async fn empty_array_falls_back_to_placeholder() {
        let provider = MockAIProvider::new().with_response("[]");

        let outcome = handler().handle(command(Some(provider))).await;

        assert_eq!(outcome.source, AnalysisSource::Placeholder);
    }

    #[tokio::test]
    async fn no_provider_skips_ai() {
        let outcome = handler().handle(command(None)).await;
        assert_eq!(outcome.source, AnalysisSource::Placeholder);
        assert_eq!(outcome.rows.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_provider_times_out() {
        let handler = RunGapAnalysisHandler::new(
            Arc::new(SimulatedDriveCatalog::new()),
            PacingConfig::immediate(),
            Duration::from_secs(1),
        );
        let provider = MockAIProvider::new()
            .with_rows(&ai_rows())
            .with_delay(Duration::from_secs(5));

        let outcome = handler.handle(command(Some(provider))).await;

        assert_eq!(outcome.source, AnalysisSource::Placeholder);
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_minimum_presentation_delay() {
        let handler = RunGapAnalysisHandler::new(
            Arc::new(SimulatedDriveCatalog::new()),
            PacingConfig::default(),
            Duration::from_secs(60),
        );
        let start = Instant::now();

        handler.handle(command(None)).await;

        assert!(start.elapsed() >= Duration::from_millis(2500));
    }

    #[test]
    fn timeout_seconds_saturate_instead_of_truncating() {
        assert_eq!(whole_seconds(Duration::from_secs(60)), 60);
        assert_eq!(whole_seconds(Duration::from_secs(u64::from(u32::MAX) + 1)), u32::MAX);
        assert_eq!(whole_seconds(Duration::MAX), u32::MAX);
    }
}
