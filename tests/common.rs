//! Test helper utilities for deepsearcher-llm integration tests
//!
//! Shared fixtures for tests that talk to a wiremock server through the real
//! HTTP client.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use deepsearcher_llm::{AdapterOptions, ChatAdapter, ChatMessage, HttpClientFactory, ProviderDescriptor};
use wiremock::ResponseTemplate;

/// Build an adapter pointed at `base_url`, ignoring the process environment
pub fn adapter_for(
    descriptor: ProviderDescriptor,
    base_url: &str,
    api_key: Option<&str>,
) -> ChatAdapter {
    let mut options = AdapterOptions::new().with_base_url(base_url);
    if let Some(key) = api_key {
        options = options.with_api_key(key);
    }
    ChatAdapter::with_environment(descriptor, options, &HttpClientFactory, |_| None)
        .expect("adapter should build against mock server")
}

/// Successful chat-completion body
pub fn success_body(content: &str, total_tokens: u64) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 40,
            "completion_tokens": total_tokens.saturating_sub(40),
            "total_tokens": total_tokens
        }
    })
}

pub fn success_response(content: &str, total_tokens: u64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(success_body(content, total_tokens))
}

/// OpenAI-style error envelope
pub fn error_response(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({
        "error": {
            "message": message,
            "type": "invalid_request_error",
            "code": null
        }
    }))
}

pub fn multi_turn_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("You are a helpful assistant"),
        ChatMessage::user("Hello"),
        ChatMessage::assistant("Hi there!"),
        ChatMessage::user("How are you?"),
    ]
}

pub fn multi_turn_wire() -> serde_json::Value {
    serde_json::json!([
        {"role": "system", "content": "You are a helpful assistant"},
        {"role": "user", "content": "Hello"},
        {"role": "assistant", "content": "Hi there!"},
        {"role": "user", "content": "How are you?"}
    ])
}
