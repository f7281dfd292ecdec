//! Volcengine Ark provider

use crate::adapter::ChatAdapter;
use crate::config::{AdapterOptions, ProviderDescriptor};
use crate::error::LlmResult;

pub const VOLCENGINE: ProviderDescriptor = ProviderDescriptor {
    name: "volcengine",
    default_model: "deepseek-r1-250120",
    default_base_url: Some("https://ark.cn-beijing.volces.com/api/v3"),
    api_key_env: "VOLCENGINE_API_KEY",
    base_url_env: "VOLCENGINE_BASE_URL",
    temperature: None,
};

impl ChatAdapter {
    /// Volcengine Ark adapter, default model `deepseek-r1-250120`
    pub fn volcengine(options: AdapterOptions) -> LlmResult<Self> {
        Self::new(VOLCENGINE, options)
    }
}
