//! Provider descriptors and adapter configuration.
//!
//! Every provider is the same adapter parameterized by a [`ProviderDescriptor`].
//! Each field resolves independently, highest priority first:
//!
//! 1. explicit [`AdapterOptions`] value, when non-empty
//! 2. the provider's environment variable, when set and non-empty
//! 3. the descriptor's hard-coded default
//! 4. absent, left for the underlying client to accept or reject
//!
//! `model` has no environment variable and always falls back to the
//! descriptor's default model.

use crate::error::{LlmError, LlmResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Static identity of an OpenAI-compatible provider.
///
/// The built-in catalog lives in [`crate::providers`]; callers can declare
/// their own descriptors for providers that follow the same contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderDescriptor {
    /// Short provider name used in logs and catalog lookups.
    pub name: &'static str,
    /// Model used when none is supplied.
    pub default_model: &'static str,
    /// Endpoint used when neither argument nor environment supplies one.
    pub default_base_url: Option<&'static str>,
    /// Environment variable holding the credential.
    pub api_key_env: &'static str,
    /// Environment variable holding the endpoint.
    pub base_url_env: &'static str,
    /// Fixed sampling temperature sent with every request, if any.
    pub temperature: Option<f64>,
}

/// Caller-supplied overrides for building an adapter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdapterOptions {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    /// Free-form options forwarded verbatim to the client constructor.
    #[serde(default)]
    pub client_options: BTreeMap<String, String>,
}

impl AdapterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_client_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.client_options.insert(key.into(), value.into());
        self
    }

    /// Build options from a parsed `llm` settings section.
    ///
    /// `model`, `api_key` and `base_url` map to their fields; `provider` is
    /// skipped; every other key becomes a client option.
    pub fn from_section(section: &HashMap<String, String>) -> Self {
        let mut options = Self::default();
        for (key, value) in section {
            match key.as_str() {
                "provider" => {}
                "model" => options.model = Some(value.clone()),
                "api_key" => options.api_key = Some(value.clone()),
                "base_url" => options.base_url = Some(value.clone()),
                _ => {
                    options.client_options.insert(key.clone(), value.clone());
                }
            }
        }
        options
    }
}

/// Fully resolved configuration of one adapter instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub provider: &'static str,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
}

impl ProviderConfig {
    /// Resolve against the process environment.
    pub fn resolve(descriptor: &ProviderDescriptor, options: &AdapterOptions) -> Self {
        Self::resolve_with(descriptor, options, |name| std::env::var(name).ok())
    }

    /// Resolve against an arbitrary environment lookup.
    pub fn resolve_with<F>(descriptor: &ProviderDescriptor, options: &AdapterOptions, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = non_empty(options.api_key.as_deref())
            .or_else(|| non_empty(env(descriptor.api_key_env).as_deref()));

        let base_url = non_empty(options.base_url.as_deref())
            .or_else(|| non_empty(env(descriptor.base_url_env).as_deref()))
            .or_else(|| descriptor.default_base_url.map(str::to_string));

        let model = non_empty(options.model.as_deref())
            .unwrap_or_else(|| descriptor.default_model.to_string());

        log_debug!(
            provider = descriptor.name,
            has_api_key = api_key.is_some(),
            base_url = ?base_url,
            model = %model,
            "Resolved provider configuration"
        );

        Self {
            provider: descriptor.name,
            api_key,
            base_url,
            model,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Arguments handed to a [`crate::providers::ClientFactory`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub options: BTreeMap<String, String>,
}

impl ClientSettings {
    pub fn from_config(config: &ProviderConfig, options: &BTreeMap<String, String>) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            options: options.clone(),
        }
    }

    /// Parse a numeric option, failing on malformed values.
    pub fn parse_option<T: std::str::FromStr>(&self, key: &str) -> LlmResult<Option<T>> {
        match self.options.get(key) {
            None => Ok(None),
            Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
                LlmError::configuration_error(format!("Invalid value for client option {key}: {raw}"))
            }),
        }
    }
}
