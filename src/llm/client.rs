use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::groq::GroqClient;

/// A text-completion provider: given a prompt, returns the model's reply.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "groq" => Ok(Box::new(GroqClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: groq",
            other
        ),
    }
}
