//! Basic OpenAI example demonstrating a single chat call.
//!
//! This example shows how to:
//! - Create an OpenAI adapter (key and endpoint come from the environment)
//! - Build a simple conversation
//! - Read the normalized content and token total
//!
//! # Running
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//! RUST_LOG=deepsearcher_llm=debug cargo run --example basic_openai
//! ```

use deepsearcher_llm::{AdapterOptions, ChatAdapter, ChatMessage};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // gpt-4o-mini instead of the o1-mini default keeps the demo cheap
    let llm = ChatAdapter::openai(AdapterOptions::new().with_model("gpt-4o-mini"))?;

    let messages = vec![
        ChatMessage::system("You are a helpful assistant. Be concise."),
        ChatMessage::user("What is the capital of France? Answer in one sentence."),
    ];

    println!("Sending request to {} ({})...", llm.provider_name(), llm.model());

    let response = llm.chat(&messages).await?;

    println!("\nResponse: {}", response.content);
    println!("\nToken usage: {} total", response.total_tokens);

    Ok(())
}
