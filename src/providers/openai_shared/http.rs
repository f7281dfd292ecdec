//! HTTP client for OpenAI-compatible providers
//!
//! One attempt per call. Retry and backoff are left to callers above the
//! adapter layer.

use super::types::{OpenAIErrorBody, OpenAIRequest, OpenAIResponse};
use super::ChatCompletionClient;
use crate::config::ClientSettings;
use crate::error::{LlmError, LlmResult};
use crate::logging::{log_debug, log_error};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

/// Endpoint used when no base URL was resolved
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client options this client understands
const SUPPORTED_OPTIONS: &[&str] = &["timeout", "organization"];

/// Shared HTTP client for OpenAI-compatible providers
#[derive(Debug)]
pub struct OpenAICompatibleClient {
    client: reqwest::Client,
    endpoint: String,
    headers: HeaderMap,
    timeout: Option<Duration>,
}

impl OpenAICompatibleClient {
    /// Create a client from resolved settings.
    ///
    /// No network I/O happens here. A missing API key is accepted; the
    /// provider rejects the call instead.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if:
    /// - an option key isn't one of `timeout`, `organization`
    /// - `timeout` isn't a number of seconds
    /// - the API key or organization can't be used as a header value
    pub fn new(settings: &ClientSettings) -> LlmResult<Self> {
        if let Some(unknown) = settings
            .options
            .keys()
            .find(|key| !SUPPORTED_OPTIONS.contains(&key.as_str()))
        {
            return Err(LlmError::configuration_error(format!(
                "Unsupported client option: {unknown}"
            )));
        }

        let timeout = settings
            .parse_option::<f64>("timeout")?
            .map(|secs| {
                if secs.is_finite() && secs > 0.0 {
                    Ok(Duration::from_secs_f64(secs))
                } else {
                    Err(LlmError::configuration_error(format!(
                        "Client timeout must be positive, got {secs}"
                    )))
                }
            })
            .transpose()?;

        let headers = Self::build_headers(
            settings.api_key.as_deref(),
            settings.options.get("organization").map(String::as_str),
        )?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            LlmError::configuration_error(format!("Failed to build HTTP client: {e}"))
        })?;

        let base_url = settings.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let endpoint = format!("{}/chat/completions", base_url.trim_end_matches('/'));

        log_debug!(
            endpoint = %endpoint,
            has_api_key = settings.api_key.is_some(),
            timeout_ms = timeout.map(|t| t.as_millis() as u64),
            "OpenAI-compatible client initialized"
        );

        Ok(Self {
            client,
            endpoint,
            headers,
            timeout,
        })
    }

    /// Full URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build JSON and authentication headers
    pub fn build_headers(api_key: Option<&str>, organization: Option<&str>) -> LlmResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(api_key) = api_key {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                    LlmError::configuration_error(format!("Invalid API key format: {e}"))
                })?,
            );
        }

        if let Some(organization) = organization {
            headers.insert(
                "OpenAI-Organization",
                HeaderValue::from_str(organization).map_err(|e| {
                    LlmError::configuration_error(format!("Invalid organization header: {e}"))
                })?,
            );
        }

        Ok(headers)
    }

    fn send_error(&self, e: reqwest::Error) -> LlmError {
        log_error!(
            url = %self.endpoint,
            error = %e,
            "HTTP request failed"
        );
        if e.is_timeout() {
            // Round up so sub-second timeouts never report as 0s
            let secs = self
                .timeout
                .map(|t| t.as_secs_f64().ceil() as u64)
                .unwrap_or_default();
            return LlmError::timeout(secs);
        }
        LlmError::request_failed(format!("Request failed: {e}"), Some(Box::new(e)))
    }
}

#[async_trait]
impl ChatCompletionClient for OpenAICompatibleClient {
    async fn create(&self, request: OpenAIRequest) -> LlmResult<OpenAIResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.send_error(e))?;

        if !response.status().is_success() {
            return Err(handle_error_response(response).await);
        }

        parse_success_response(response).await
    }
}

/// Map a non-success HTTP response onto [`LlmError`]
async fn handle_error_response(response: reqwest::Response) -> LlmError {
    let status = response.status();
    let headers = response.headers().clone();
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    log_error!(
        status = %status,
        error_text = %error_text,
        "API error response"
    );

    let detail = serde_json::from_str::<OpenAIErrorBody>(&error_text)
        .ok()
        .map(|body| body.error);

    match status.as_u16() {
        401 => {
            let message = detail
                .map(|d| d.message)
                .unwrap_or_else(|| "Authentication failed".to_string());
            LlmError::authentication_failed(message)
        }
        429 => {
            let retry_after_seconds = headers
                .get("retry-after")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);

            LlmError::rate_limit_exceeded(retry_after_seconds)
        }
        code => match detail {
            Some(detail) => {
                log_debug!(status = code, error_code = ?detail.code, "Provider error payload");
                LlmError::provider_error(Some(code), detail.message)
            }
            None => LlmError::provider_error(Some(code), format!("API error {status}: {error_text}")),
        },
    }
}

/// Parse successful HTTP response into OpenAIResponse
async fn parse_success_response(response: reqwest::Response) -> LlmResult<OpenAIResponse> {
    let raw_body = response.text().await.map_err(|e| {
        log_error!(
            error = %e,
            "Failed to read response body"
        );
        LlmError::response_parsing_error(format!("Failed to read response: {e}"))
    })?;

    serde_json::from_str(&raw_body).map_err(|e| {
        log_error!(
            error = %e,
            raw_body = %raw_body,
            "Failed to parse response"
        );
        LlmError::response_parsing_error(format!("Invalid response: {e}"))
    })
}
