//! Provider switching example - same code works across different providers.
//!
//! This example demonstrates:
//! - Selecting a provider by name at runtime
//! - Building the adapter from a flat settings section
//! - Stripping a `<think>` block from reasoning-model output
//!
//! # Running
//!
//! ```bash
//! # For OpenAI
//! export AI_PROVIDER=openai
//! export OPENAI_API_KEY="sk-..."
//! cargo run --example provider_switching
//!
//! # For Volcengine (defaults to deepseek-r1-250120)
//! export AI_PROVIDER=volcengine
//! export VOLCENGINE_API_KEY="..."
//! cargo run --example provider_switching
//!
//! # Any other built-in provider: deepseek, siliconflow, ppio, xai
//! ```

use deepsearcher_llm::{ChatAdapter, ChatMessage, BUILTIN_PROVIDERS};
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let provider = std::env::var("AI_PROVIDER").unwrap_or_else(|_| "openai".to_string());
    println!("Using provider: {provider}");
    println!(
        "Available: {}\n",
        BUILTIN_PROVIDERS
            .iter()
            .map(|d| d.name)
            .collect::<Vec<_>>()
            .join(", ")
    );

    // Same shape as an `llm` section of a settings file
    let mut section = HashMap::new();
    section.insert("provider".to_string(), provider);
    if let Ok(model) = std::env::var("AI_MODEL") {
        section.insert("model".to_string(), model);
    }

    let llm = ChatAdapter::from_section(&section)?;

    // Identical regardless of provider
    let messages = vec![
        ChatMessage::system("You are a helpful assistant. Be concise."),
        ChatMessage::user("What is 2 + 2? Answer with just the number."),
    ];

    println!("Sending request to {}...", llm.model());

    let response = llm.chat(&messages).await?;

    println!("Response: {}", response.answer());
    println!("Tokens: {} total", response.total_tokens);

    Ok(())
}
