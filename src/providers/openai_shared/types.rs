//! OpenAI-compatible chat-completion wire types
//!
//! Every provider in the catalog speaks this shape, so one set of structures
//! serves all of them.

use crate::messages::ChatMessage;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAIRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// OpenAI-compatible chat completion response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAIResponse {
    #[serde(default)]
    pub choices: Vec<OpenAIChoice>,
    #[serde(default)]
    pub usage: Option<OpenAIUsage>,
}

/// Choice in OpenAI response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAIChoice {
    pub message: OpenAIResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Message in OpenAI response choice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAIResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    /// `null` for refusals and tool-only turns
    #[serde(default)]
    pub content: Option<String>,
}

/// Usage information in OpenAI response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAIUsage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OpenAIErrorBody {
    pub error: OpenAIErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OpenAIErrorDetail {
    pub message: String,
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

impl OpenAIResponse {
    /// Build a single-choice response, mostly for test doubles.
    pub fn single(content: impl Into<String>, total_tokens: u64) -> Self {
        Self {
            choices: vec![OpenAIChoice {
                message: OpenAIResponseMessage {
                    role: Some("assistant".to_string()),
                    content: Some(content.into()),
                },
                finish_reason: Some("stop".to_string()),
            }],
            usage: Some(OpenAIUsage {
                prompt_tokens: 0,
                completion_tokens: 0,
                total_tokens,
            }),
        }
    }
}
