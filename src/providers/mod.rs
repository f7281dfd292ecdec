//! LLM provider catalog
//!
//! Every provider here speaks the OpenAI chat-completions API, so each one is
//! just a [`ProviderDescriptor`] plus a convenience constructor:
//!
//! ```text
//! openai_shared/      <- wire types, client trait, reqwest client
//!      |
//! adapter.rs          <- ChatAdapter, one code path for all providers
//!      |
//! openai.rs  volcengine.rs  hosted.rs   <- descriptors
//! ```

pub mod hosted;
pub mod openai;
pub mod openai_shared;
pub mod volcengine;

#[cfg(test)]
mod tests;

use crate::config::ProviderDescriptor;
use crate::error::{LlmError, LlmResult};

pub use hosted::{DEEPSEEK, PPIO, SILICONFLOW, XAI};
pub use openai::OPENAI;
pub use openai_shared::{ChatCompletionClient, ClientFactory, HttpClientFactory};
pub use volcengine::VOLCENGINE;

/// Every provider [`crate::ChatAdapter::for_provider`] knows by name
pub const BUILTIN_PROVIDERS: &[ProviderDescriptor] =
    &[OPENAI, VOLCENGINE, DEEPSEEK, SILICONFLOW, PPIO, XAI];

/// Look up a catalog descriptor by name, ignoring case.
pub fn descriptor_for(name: &str) -> LlmResult<ProviderDescriptor> {
    BUILTIN_PROVIDERS
        .iter()
        .find(|descriptor| descriptor.name.eq_ignore_ascii_case(name.trim()))
        .copied()
        .ok_or_else(|| LlmError::unsupported_provider(name))
}
