//! newsbrief - AI-powered summarization for pasted news articles
//!
//! Sends article text to the Groq API with a fixed prompt template and
//! parses the reply into a summary, key takeaways, and a category.

pub mod cli;
pub mod config;
pub mod llm;
pub mod summarizer;
pub mod web;

use thiserror::Error;

/// Main error type for newsbrief
///
/// Both variants carry the same user-facing prefix so callers see a single
/// failure channel regardless of whether the model call or the response
/// parsing went wrong.
#[derive(Error, Debug)]
pub enum NewsbriefError {
    #[error("Failed to fetch summary: {0}")]
    Transport(String),

    #[error("Failed to fetch summary: response is missing the '{0}' marker")]
    Format(&'static str),
}

pub type Result<T> = std::result::Result<T, NewsbriefError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "newsbrief";
