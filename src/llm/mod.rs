//! LLM module for newsbrief
//!
//! Provider abstraction and the Groq chat-completions client.

mod client;
mod groq;
mod prompts;

pub use client::{build_provider, LlmProvider};
pub use groq::GroqClient;
pub use prompts::build_summary_prompt;
