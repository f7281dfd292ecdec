//! The uniform chat adapter.
//!
//! One [`ChatAdapter`] type serves every provider; a [`ProviderDescriptor`]
//! supplies the differences. The adapter is a translation layer only:
//! it builds one request per call, hands it to its client, and reads back the
//! first choice and the usage total. Client errors pass through untouched.

use crate::config::{AdapterOptions, ClientSettings, ProviderConfig, ProviderDescriptor};
use crate::error::{LlmError, LlmResult};
use crate::logging::{log_debug, log_info};
use crate::messages::{ChatMessage, ChatResponse};
use crate::providers::openai_shared::{
    ChatCompletionClient, ClientFactory, HttpClientFactory, OpenAIRequest, OpenAIResponse,
};
use crate::providers::descriptor_for;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Chat adapter over an OpenAI-compatible provider
#[derive(Clone)]
pub struct ChatAdapter {
    descriptor: ProviderDescriptor,
    config: ProviderConfig,
    client: Arc<dyn ChatCompletionClient>,
}

impl ChatAdapter {
    /// Create an adapter backed by the bundled HTTP client.
    ///
    /// Reads the provider's environment variables once, here.
    ///
    /// # Errors
    ///
    /// Returns whatever the client constructor rejects, typically
    /// [`LlmError::ConfigurationError`] for unknown client options.
    pub fn new(descriptor: ProviderDescriptor, options: AdapterOptions) -> LlmResult<Self> {
        Self::with_factory(descriptor, options, &HttpClientFactory)
    }

    /// Create an adapter whose client comes from `factory`.
    pub fn with_factory(
        descriptor: ProviderDescriptor,
        options: AdapterOptions,
        factory: &dyn ClientFactory,
    ) -> LlmResult<Self> {
        let config = ProviderConfig::resolve(&descriptor, &options);
        Self::from_config(descriptor, config, &options.client_options, factory)
    }

    /// Like [`ChatAdapter::with_factory`], resolving against `env` instead of
    /// the process environment.
    pub fn with_environment<F>(
        descriptor: ProviderDescriptor,
        options: AdapterOptions,
        factory: &dyn ClientFactory,
        env: F,
    ) -> LlmResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ProviderConfig::resolve_with(&descriptor, &options, env);
        Self::from_config(descriptor, config, &options.client_options, factory)
    }

    /// Build the client for an already-resolved configuration.
    pub fn from_config(
        descriptor: ProviderDescriptor,
        config: ProviderConfig,
        client_options: &BTreeMap<String, String>,
        factory: &dyn ClientFactory,
    ) -> LlmResult<Self> {
        let settings = ClientSettings::from_config(&config, client_options);
        let client = factory.build(&settings)?;

        log_info!(
            provider = descriptor.name,
            model = %config.model,
            has_api_key = config.api_key.is_some(),
            base_url = ?config.base_url,
            "Chat adapter initialized"
        );

        Ok(Self {
            descriptor,
            config,
            client,
        })
    }

    /// Create an adapter for a catalog provider by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::UnsupportedProvider`] for names outside the catalog.
    pub fn for_provider(name: &str, options: AdapterOptions) -> LlmResult<Self> {
        Self::new(descriptor_for(name)?, options)
    }

    /// Create an adapter from a parsed `llm` settings section.
    ///
    /// The section must name a `provider`; see [`AdapterOptions::from_section`]
    /// for how the remaining keys are used.
    pub fn from_section(section: &HashMap<String, String>) -> LlmResult<Self> {
        let provider = section.get("provider").ok_or_else(|| {
            LlmError::configuration_error("Missing 'provider' field in LLM config")
        })?;
        Self::for_provider(provider, AdapterOptions::from_section(section))
    }

    pub fn provider_name(&self) -> &'static str {
        self.descriptor.name
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn descriptor(&self) -> &ProviderDescriptor {
        &self.descriptor
    }

    /// Send the conversation and return the first choice with its usage.
    ///
    /// Issues exactly one client call. Messages are forwarded in order and
    /// unmodified; an empty slice is forwarded as-is.
    ///
    /// # Errors
    ///
    /// Client errors are returned unchanged. A response with no choices, a
    /// `null` first-choice content, or no usage block yields
    /// [`LlmError::ResponseParsingError`].
    pub async fn chat(&self, messages: &[ChatMessage]) -> LlmResult<ChatResponse> {
        let request = self.build_request(messages);

        log_debug!(
            provider = self.descriptor.name,
            model = %request.model,
            message_count = request.messages.len(),
            "Executing chat request"
        );

        let start_time = Instant::now();
        let response = self.client.create(request).await?;
        let duration_ms = start_time.elapsed().as_millis() as u64;

        let chat_response = self.normalize(response)?;

        log_debug!(
            provider = self.descriptor.name,
            duration_ms = duration_ms,
            total_tokens = chat_response.total_tokens,
            "Chat request completed"
        );

        Ok(chat_response)
    }

    fn build_request(&self, messages: &[ChatMessage]) -> OpenAIRequest {
        OpenAIRequest {
            model: self.config.model.clone(),
            messages: messages.to_vec(),
            temperature: self.descriptor.temperature,
        }
    }

    fn normalize(&self, response: OpenAIResponse) -> LlmResult<ChatResponse> {
        let choice = response.choices.into_iter().next().ok_or_else(|| {
            LlmError::response_parsing_error(format!(
                "No choices in {} response",
                self.descriptor.name
            ))
        })?;

        let content = choice.message.content.ok_or_else(|| {
            LlmError::response_parsing_error(format!(
                "First choice in {} response has no content",
                self.descriptor.name
            ))
        })?;

        let usage = response.usage.ok_or_else(|| {
            LlmError::response_parsing_error(format!(
                "No usage in {} response",
                self.descriptor.name
            ))
        })?;

        Ok(ChatResponse {
            content,
            total_tokens: usage.total_tokens,
        })
    }
}

impl fmt::Debug for ChatAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatAdapter")
            .field("provider", &self.descriptor.name)
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .field("has_api_key", &self.config.api_key.is_some())
            .finish_non_exhaustive()
    }
}
