//! Provider Tests Module
//!
//! Every catalog provider must honour the same construction and chat
//! contract. The checks live here once, parameterized by descriptor; the
//! per-provider modules pin each provider's own defaults and env names.
//!
//! ## Test Organization
//!
//! - `openai.rs` - OpenAI defaults and env handling
//! - `volcengine.rs` - Volcengine defaults and env handling
//! - `catalog.rs` - name lookup plus the shared contract over every descriptor
//!
//! Network I/O is replaced by `MockChatCompletionClient` handed in through a
//! recording `ClientFactory`; HTTP behaviour is covered by `tests/`.


use crate::adapter::ChatAdapter;
use crate::config::{AdapterOptions, ProviderDescriptor};
use crate::error::LlmError;
use crate::tests::helpers::{
    empty_env, env_from, expecting_mock, failing_mock, multi_turn_messages, single_message,
    RecordingFactory,
};

/// No arguments, empty environment: descriptor defaults reach the client
fn check_defaults(descriptor: ProviderDescriptor) {
    let factory = RecordingFactory::idle();

    let llm =
        ChatAdapter::with_environment(descriptor, AdapterOptions::new(), &factory, empty_env())
            .unwrap();

    let settings = factory.only_call();
    assert_eq!(settings.api_key, None);
    assert_eq!(
        settings.base_url.as_deref(),
        descriptor.default_base_url,
        "{} base URL should fall back to its default",
        descriptor.name
    );
    assert!(settings.options.is_empty());
    assert_eq!(llm.model(), descriptor.default_model);
}

/// Credential only in the environment
fn check_api_key_from_env(descriptor: ProviderDescriptor) {
    let factory = RecordingFactory::idle();
    let env = env_from(&[(descriptor.api_key_env, "test_api_key_from_env")]);

    ChatAdapter::with_environment(descriptor, AdapterOptions::new(), &factory, env).unwrap();

    let settings = factory.only_call();
    assert_eq!(settings.api_key.as_deref(), Some("test_api_key_from_env"));
    assert_eq!(settings.base_url.as_deref(), descriptor.default_base_url);
}

/// Explicit arguments win over environment values, field by field
fn check_explicit_overrides_env(descriptor: ProviderDescriptor) {
    let env = env_from(&[
        (descriptor.api_key_env, "env-key"),
        (descriptor.base_url_env, "https://env.example.com/v1"),
    ]);

    let key_only = RecordingFactory::idle();
    ChatAdapter::with_environment(
        descriptor,
        AdapterOptions::new().with_api_key("arg-key"),
        &key_only,
        &env,
    )
    .unwrap();
    let settings = key_only.only_call();
    assert_eq!(settings.api_key.as_deref(), Some("arg-key"));
    assert_eq!(
        settings.base_url.as_deref(),
        Some("https://env.example.com/v1")
    );

    let url_only = RecordingFactory::idle();
    ChatAdapter::with_environment(
        descriptor,
        AdapterOptions::new().with_base_url("https://arg.example.com/v1"),
        &url_only,
        &env,
    )
    .unwrap();
    let settings = url_only.only_call();
    assert_eq!(settings.api_key.as_deref(), Some("env-key"));
    assert_eq!(
        settings.base_url.as_deref(),
        Some("https://arg.example.com/v1")
    );

    let model_only = RecordingFactory::idle();
    let llm = ChatAdapter::with_environment(
        descriptor,
        AdapterOptions::new().with_model("custom-model"),
        &model_only,
        &env,
    )
    .unwrap();
    assert_eq!(llm.model(), "custom-model");
    assert_eq!(model_only.only_call().api_key.as_deref(), Some("env-key"));
}

/// One create call with resolved model and untouched messages
async fn check_chat_forwards(descriptor: ProviderDescriptor, messages: Vec<crate::ChatMessage>) {
    let factory = RecordingFactory::new(expecting_mock(
        descriptor.default_model,
        messages.clone(),
        1,
    ));
    let llm =
        ChatAdapter::with_environment(descriptor, AdapterOptions::new(), &factory, empty_env())
            .unwrap();

    let response = llm.chat(&messages).await.unwrap();

    assert_eq!(response.content, "Test response");
    assert_eq!(response.total_tokens, 100);
}

/// Client errors come back with the same variant and text
async fn check_error_propagates(descriptor: ProviderDescriptor, message: &'static str) {
    let factory = RecordingFactory::new(failing_mock(message));
    let llm =
        ChatAdapter::with_environment(descriptor, AdapterOptions::new(), &factory, empty_env())
            .unwrap();

    let err = llm.chat(&single_message()).await.unwrap_err();

    assert_eq!(err.to_string(), message);
    assert!(
        matches!(err, LlmError::ProviderError { status: None, .. }),
        "error variant should pass through unchanged, got {err:?}"
    );
}

async fn check_contract(descriptor: ProviderDescriptor) {
    check_defaults(descriptor);
    check_api_key_from_env(descriptor);
    check_explicit_overrides_env(descriptor);
    check_chat_forwards(descriptor, single_message()).await;
    check_chat_forwards(descriptor, multi_turn_messages()).await;
    check_error_propagates(descriptor, "Provider API Error").await;
}
