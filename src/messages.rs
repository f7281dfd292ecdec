//! Conversation messages and the normalized chat result.
//!
//! A conversation is an ordered `Vec<ChatMessage>`. Adapters forward it to the
//! provider exactly as given, so the caller owns the full history and its order.

use crate::error::LlmResult;
use crate::response_parser::ResponseParser;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single role-tagged message.
///
/// Serializes to the OpenAI wire shape `{"role": "...", "content": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Normalized result of one chat call.
///
/// `content` is the first choice's text exactly as the provider returned it,
/// reasoning block included. Use [`ChatResponse::answer`] to drop the block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The assistant's reply text.
    pub content: String,
    /// Usage total reported by the provider.
    pub total_tokens: u64,
}

impl ChatResponse {
    pub fn new(content: impl Into<String>, total_tokens: u64) -> Self {
        Self {
            content: content.into(),
            total_tokens,
        }
    }

    /// Reply text without a leading `<think>...</think>` block.
    pub fn answer(&self) -> &str {
        ResponseParser::strip_reasoning(&self.content)
    }

    /// Parse the first list literal in the reply, e.g. a list of sub-queries.
    pub fn parse_list(&self) -> LlmResult<Vec<serde_json::Value>> {
        ResponseParser::parse_list_literal(self.answer())
    }
}

impl fmt::Display for ChatResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChatResponse(content={:?}, total_tokens={})",
            self.content, self.total_tokens
        )
    }
}
