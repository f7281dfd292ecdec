//! Test helper utilities for deepsearcher-llm unit tests
//!
//! Test doubles for the client seam plus fixed environments, so adapter
//! construction can be tested without touching the process environment.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use crate::config::ClientSettings;
use crate::error::{LlmError, LlmResult};
use crate::messages::ChatMessage;
use crate::providers::openai_shared::{
    ChatCompletionClient, ClientFactory, MockChatCompletionClient, OpenAIResponse,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Factory that records every settings value it's asked to build from
pub struct RecordingFactory {
    client: Arc<dyn ChatCompletionClient>,
    calls: Mutex<Vec<ClientSettings>>,
}

impl RecordingFactory {
    pub fn new(client: impl ChatCompletionClient + 'static) -> Self {
        Self {
            client: Arc::new(client),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Factory around a mock with no expectations (construction-only tests)
    pub fn idle() -> Self {
        Self::new(MockChatCompletionClient::new())
    }

    pub fn calls(&self) -> Vec<ClientSettings> {
        self.calls.lock().unwrap().clone()
    }

    /// The single settings value the factory saw; panics on any other count
    pub fn only_call(&self) -> ClientSettings {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "client should be built exactly once");
        calls.into_iter().next().unwrap()
    }
}

impl ClientFactory for RecordingFactory {
    fn build(&self, settings: &ClientSettings) -> LlmResult<Arc<dyn ChatCompletionClient>> {
        self.calls.lock().unwrap().push(settings.clone());
        Ok(Arc::clone(&self.client))
    }
}

/// Factory whose client constructor always fails
pub struct FailingFactory;

impl ClientFactory for FailingFactory {
    fn build(&self, _settings: &ClientSettings) -> LlmResult<Arc<dyn ChatCompletionClient>> {
        Err(LlmError::configuration_error("client constructor rejected settings"))
    }
}

/// Environment with nothing set
pub fn empty_env() -> impl Fn(&str) -> Option<String> {
    |_| None
}

/// Environment holding exactly `pairs`
pub fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

/// Mock returning `"Test response"` / 100 tokens for `times` calls,
/// checking model and messages on each.
pub fn expecting_mock(
    model: &str,
    messages: Vec<ChatMessage>,
    times: usize,
) -> MockChatCompletionClient {
    let model = model.to_string();
    let mut mock = MockChatCompletionClient::new();
    mock.expect_create()
        .withf(move |request| request.model == model && request.messages == messages)
        .times(times)
        .returning(|_| Ok(OpenAIResponse::single("Test response", 100)));
    mock
}

/// Mock whose single call fails with a provider error carrying `message`
pub fn failing_mock(message: &'static str) -> MockChatCompletionClient {
    let mut mock = MockChatCompletionClient::new();
    mock.expect_create()
        .times(1)
        .returning(move |_| Err(LlmError::provider_error(None, message)));
    mock
}

/// Mock returning `response` once
pub fn mock_returning(response: OpenAIResponse) -> MockChatCompletionClient {
    let mut mock = MockChatCompletionClient::new();
    mock.expect_create()
        .times(1)
        .returning(move |_| Ok(response.clone()));
    mock
}

pub fn single_message() -> Vec<ChatMessage> {
    vec![ChatMessage::user("Hello")]
}

pub fn multi_turn_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("You are a helpful assistant"),
        ChatMessage::user("Hello"),
        ChatMessage::assistant("Hi there!"),
        ChatMessage::user("How are you?"),
    ]
}
