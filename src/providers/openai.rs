//! OpenAI provider
//!
//! No default endpoint: without `OPENAI_BASE_URL` or an explicit base URL the
//! client's own default (`https://api.openai.com/v1`) applies.

use crate::adapter::ChatAdapter;
use crate::config::{AdapterOptions, ProviderDescriptor};
use crate::error::LlmResult;

pub const OPENAI: ProviderDescriptor = ProviderDescriptor {
    name: "openai",
    default_model: "o1-mini",
    default_base_url: None,
    api_key_env: "OPENAI_API_KEY",
    base_url_env: "OPENAI_BASE_URL",
    temperature: None,
};

impl ChatAdapter {
    /// OpenAI adapter, default model `o1-mini`
    pub fn openai(options: AdapterOptions) -> LlmResult<Self> {
        Self::new(OPENAI, options)
    }
}
