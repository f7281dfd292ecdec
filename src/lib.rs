//! # deepsearcher-llm
//!
//! Uniform chat adapters over OpenAI-compatible LLM providers (OpenAI,
//! Volcengine, DeepSeek, SiliconFlow, PPIO, xAI).
//!
//! ## Key Features
//!
//! - **One adapter, many providers**: providers differ only by a
//!   [`ProviderDescriptor`] (default model, endpoint, environment variables)
//! - **Predictable configuration**: explicit argument, then environment
//!   variable, then provider default, resolved per field at construction
//! - **Transparent errors**: the adapter never retries or rewrites errors
//! - **Injectable client**: swap the HTTP client through [`ClientFactory`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use deepsearcher_llm::{AdapterOptions, ChatAdapter, ChatMessage};
//!
//! # async fn example() -> deepsearcher_llm::LlmResult<()> {
//! let llm = ChatAdapter::volcengine(AdapterOptions::new().with_api_key("your-api-key"))?;
//! let response = llm
//!     .chat(&[
//!         ChatMessage::system("You are a helpful assistant"),
//!         ChatMessage::user("Hello"),
//!     ])
//!     .await?;
//! println!("{} ({} tokens)", response.answer(), response.total_tokens);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod adapter;
pub mod config;
pub mod error;
pub mod messages;
pub mod providers;
pub mod response_parser;

#[cfg(test)]
pub mod tests;

pub use adapter::ChatAdapter;
pub use config::{AdapterOptions, ClientSettings, ProviderConfig, ProviderDescriptor};
pub use error::{LlmError, LlmResult};
pub use messages::{ChatMessage, ChatResponse, MessageRole};
pub use providers::openai_shared::{
    ChatCompletionClient, ClientFactory, HttpClientFactory, OpenAICompatibleClient,
    OpenAIRequest, OpenAIResponse,
};
pub use providers::{descriptor_for, BUILTIN_PROVIDERS};
