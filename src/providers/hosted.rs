//! Other hosted OpenAI-compatible providers
//!
//! Same construction contract as OpenAI and Volcengine: `{NAME}_API_KEY`,
//! `{NAME}_BASE_URL`, then the endpoint below.

use crate::adapter::ChatAdapter;
use crate::config::{AdapterOptions, ProviderDescriptor};
use crate::error::LlmResult;

pub const DEEPSEEK: ProviderDescriptor = ProviderDescriptor {
    name: "deepseek",
    default_model: "deepseek-reasoner",
    default_base_url: Some("https://api.deepseek.com"),
    api_key_env: "DEEPSEEK_API_KEY",
    base_url_env: "DEEPSEEK_BASE_URL",
    temperature: None,
};

pub const SILICONFLOW: ProviderDescriptor = ProviderDescriptor {
    name: "siliconflow",
    default_model: "deepseek-ai/DeepSeek-R1",
    default_base_url: Some("https://api.siliconflow.cn/v1"),
    api_key_env: "SILICONFLOW_API_KEY",
    base_url_env: "SILICONFLOW_BASE_URL",
    temperature: None,
};

pub const PPIO: ProviderDescriptor = ProviderDescriptor {
    name: "ppio",
    default_model: "deepseek/deepseek-r1-turbo",
    default_base_url: Some("https://api.ppinfra.com/v3/openai"),
    api_key_env: "PPIO_API_KEY",
    base_url_env: "PPIO_BASE_URL",
    temperature: None,
};

pub const XAI: ProviderDescriptor = ProviderDescriptor {
    name: "xai",
    default_model: "grok-2-latest",
    default_base_url: Some("https://api.x.ai/v1"),
    api_key_env: "XAI_API_KEY",
    base_url_env: "XAI_BASE_URL",
    temperature: None,
};

impl ChatAdapter {
    pub fn deepseek(options: AdapterOptions) -> LlmResult<Self> {
        Self::new(DEEPSEEK, options)
    }

    pub fn siliconflow(options: AdapterOptions) -> LlmResult<Self> {
        Self::new(SILICONFLOW, options)
    }

    pub fn ppio(options: AdapterOptions) -> LlmResult<Self> {
        Self::new(PPIO, options)
    }

    pub fn xai(options: AdapterOptions) -> LlmResult<Self> {
        Self::new(XAI, options)
    }
}
