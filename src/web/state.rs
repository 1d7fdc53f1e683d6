use crate::summarizer::Summarizer;

/// Shared state for the web UI: the one summarizer built at startup.
pub struct AppState {
    pub summarizer: Summarizer,
}
