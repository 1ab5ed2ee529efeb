//! Mock AI Provider for testing and offline runs.
//!
//! Provides a configurable mock implementation of the AIProvider port,
//! allowing tests to run without calling a real AI API.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Simulated delays
//! - Error injection for the fallback path
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_rows(&placeholder_rows())
//!     .with_delay(Duration::from_millis(100));
//!
//! let response = provider.complete(request).await?;
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::gap_analysis::ComparisonRow;
use crate::ports::{
    AIError, AIProvider, AIProviderFactory, CompletionRequest, CompletionResponse, FinishReason,
    ProviderInfo,
};

/// Mock AI provider.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    info: ProviderInfo,
    delay: Duration,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success {
        content: String,
        finish_reason: FinishReason,
    },
    Error(MockError),
}

/// Mock error types for exercising error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    RateLimited { retry_after_secs: u32 },
    ContentFiltered { reason: String },
    Unavailable { message: String },
    AuthenticationFailed,
    Network { message: String },
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::ContentFiltered { reason } => AIError::content_filtered(reason),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(MockResponse::Success {
            content: content.into(),
            finish_reason: FinishReason::Stop,
        });
        self
    }

    /// Adds a response shaped like a real gap-analysis answer: a fenced JSON
    /// array of `{item, old, new, reason}` objects.
    pub fn with_rows(self, rows: &[ComparisonRow]) -> Self {
        let array: Vec<_> = rows
            .iter()
            .map(|r| {
                json!({
                    "item": r.item,
                    "old": r.current,
                    "new": r.proposed,
                    "reason": r.rationale,
                })
            })
            .collect();
        let body = serde_json::Value::Array(array).to_string();
        self.with_response(format!("Here is the comparison.\n```json\n{}\n```", body))
    }

    pub fn with_error(self, error: MockError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: "Mock response".to_string(),
                finish_reason: FinishReason::Stop,
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        self.calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success {
                content,
                finish_reason,
            } => Ok(CompletionResponse {
                content,
                model: self.info.model.clone(),
                finish_reason,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

/// Factory handing out a shared `MockAIProvider`.
///
/// Keys listed with `rejecting` fail with `AuthenticationFailed`, which is
/// how tests drive the connect-failure path.
#[derive(Debug, Clone, Default)]
pub struct MockAIProviderFactory {
    provider: MockAIProvider,
    rejected_keys: Vec<String>,
    created: Arc<Mutex<usize>>,
}

impl MockAIProviderFactory {
    pub fn new(provider: MockAIProvider) -> Self {
        Self {
            provider,
            rejected_keys: Vec::new(),
            created: Arc::new(Mutex::new(0)),
        }
    }

    pub fn rejecting(mut self, key: impl Into<String>) -> Self {
        self.rejected_keys.push(key.into());
        self
    }

    /// Number of providers successfully created.
    pub fn created_count(&self) -> usize {
        *self.created.lock().unwrap()
    }
}

#[async_trait]
impl AIProviderFactory for MockAIProviderFactory {
    async fn create(&self, api_key: Secret<String>) -> Result<Arc<dyn AIProvider>, AIError> {
        let key = api_key.expose_secret();
        if key.trim().is_empty() || self.rejected_keys.iter().any(|k| k == key) {
            return Err(AIError::AuthenticationFailed);
        }
        *self.created.lock().unwrap() += 1;
        Ok(Arc::new(self.provider.clone()))
    }
}
