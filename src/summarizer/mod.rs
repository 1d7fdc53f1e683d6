//! Summarization pipeline
//!
//! One stateless operation: build the prompt, call the provider, extract
//! the three result fields. Every call resolves to a well-formed
//! `Result` - provider faults and parse faults both surface as
//! [`NewsbriefError`] values, never as panics.

mod extract;

pub use extract::{
    extract, ArticleSummary, CATEGORIES, CATEGORY_MARKER, SUMMARY_MARKER, TAKEAWAYS_MARKER,
};

use anyhow::Result as AnyResult;

use crate::config::Settings;
use crate::llm::{build_provider, build_summary_prompt, LlmProvider};
use crate::{NewsbriefError, Result};

/// The summarization operation, holding the one provider handle built at
/// startup.
pub struct Summarizer {
    provider: Box<dyn LlmProvider>,
}

impl Summarizer {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    pub fn from_settings(settings: &Settings) -> AnyResult<Self> {
        Ok(Self::new(build_provider(settings)?))
    }

    /// Summarize one article text.
    ///
    /// The text is embedded into the prompt unchanged, empty input
    /// included; the model decides how to respond. No retry: a malformed
    /// completion or a failed call is terminal for this invocation.
    pub async fn summarize(&self, article_text: &str) -> Result<ArticleSummary> {
        let prompt = build_summary_prompt(article_text);

        tracing::debug!("Summarizing article - Length: {} chars", article_text.len());

        let completion = self
            .provider
            .complete(&prompt)
            .await
            .map_err(|e| NewsbriefError::Transport(format!("{e:#}")))?;

        extract(&completion)
    }
}
