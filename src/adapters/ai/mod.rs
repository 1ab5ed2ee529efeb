//! AI adapters.

mod mock_provider;

pub use mock_provider::{MockAIProvider, MockAIProviderFactory, MockError, MockResponse};
