//! Shared OpenAI-compatible client layer
//!
//! - `types` - request/response wire structures
//! - `http` - the reqwest-backed client
//!
//! Adapters only see the [`ChatCompletionClient`] trait, and build it through
//! a [`ClientFactory`], so tests can hand in a double instead of a network
//! client.

pub mod http;
pub mod types;

pub use http::{OpenAICompatibleClient, DEFAULT_BASE_URL};
pub use types::*;

use crate::config::ClientSettings;
use crate::error::LlmResult;
use async_trait::async_trait;
use std::sync::Arc;

/// The chat-completion operation an adapter delegates to.
///
/// Implementations must be safe to call concurrently.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatCompletionClient: Send + Sync {
    async fn create(&self, request: OpenAIRequest) -> LlmResult<OpenAIResponse>;
}

/// Builds the client an adapter owns. Called once per adapter.
pub trait ClientFactory: Send + Sync {
    fn build(&self, settings: &ClientSettings) -> LlmResult<Arc<dyn ChatCompletionClient>>;
}

/// Factory producing [`OpenAICompatibleClient`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpClientFactory;

impl ClientFactory for HttpClientFactory {
    fn build(&self, settings: &ClientSettings) -> LlmResult<Arc<dyn ChatCompletionClient>> {
        Ok(Arc::new(OpenAICompatibleClient::new(settings)?))
    }
}
