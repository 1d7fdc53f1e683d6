//! Response extraction
//!
//! The model is asked to reply using three literal section markers. This
//! module slices the completion text on those markers into an
//! [`ArticleSummary`]. Marker matching is restricted to line starts so a
//! marker phrase quoted inside a section body cannot shift the split.

use serde::Serialize;

use crate::{NewsbriefError, Result};

/// Section marker preceding the summary sentences.
pub const SUMMARY_MARKER: &str = "- Summary: ";
/// Section marker preceding the key-takeaways list.
pub const TAKEAWAYS_MARKER: &str = "- Key Takeaways:";
/// Section marker preceding the category label.
pub const CATEGORY_MARKER: &str = "- Category:";

/// The fixed category labels offered to the model.
pub const CATEGORIES: [&str; 9] = [
    "Politics",
    "Business",
    "Sports",
    "Science",
    "Technology",
    "Health",
    "Entertainment",
    "Environment",
    "World News",
];

/// Parsed summarization result.
///
/// `key_takeaways` keeps the `- Key Takeaways:` heading so the block can be
/// displayed as-is under the summary. `category` is expected to be one of
/// [`CATEGORIES`] but is not enforced; the label is whatever the model wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSummary {
    pub summary: String,
    pub key_takeaways: String,
    pub category: String,
}

/// Find the first occurrence of `marker` at a line start, at or after `from`.
fn find_at_line_start(text: &str, marker: &str, from: usize) -> Option<usize> {
    let mut search = from;
    while let Some(rel) = text[search..].find(marker) {
        let pos = search + rel;
        if pos == 0 || text.as_bytes()[pos - 1] == b'\n' {
            return Some(pos);
        }
        search = pos + marker.len();
    }
    None
}

/// Split a model completion on the three section markers.
///
/// All three markers must appear at line starts, in order. Each extracted
/// segment is whitespace-trimmed. Any missing or out-of-order marker yields
/// [`NewsbriefError::Format`] naming the marker that was expected; this
/// function never panics on malformed input.
pub fn extract(response_text: &str) -> Result<ArticleSummary> {
    let summary_pos = find_at_line_start(response_text, SUMMARY_MARKER, 0)
        .ok_or(NewsbriefError::Format(SUMMARY_MARKER))?;
    let summary_start = summary_pos + SUMMARY_MARKER.len();

    let takeaways_pos = find_at_line_start(response_text, TAKEAWAYS_MARKER, summary_start)
        .ok_or(NewsbriefError::Format(TAKEAWAYS_MARKER))?;
    let takeaways_start = takeaways_pos + TAKEAWAYS_MARKER.len();

    let category_pos = find_at_line_start(response_text, CATEGORY_MARKER, takeaways_start)
        .ok_or(NewsbriefError::Format(CATEGORY_MARKER))?;
    let category_start = category_pos + CATEGORY_MARKER.len();

    let summary = response_text[summary_start..takeaways_pos].trim().to_string();
    let takeaways_body = response_text[takeaways_start..category_pos].trim();
    let key_takeaways = format!("{TAKEAWAYS_MARKER}\n{takeaways_body}");
    let category = response_text[category_start..].trim().to_string();

    Ok(ArticleSummary {
        summary,
        key_takeaways,
        category,
    })
}
