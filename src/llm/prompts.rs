use crate::summarizer::{CATEGORIES, CATEGORY_MARKER, SUMMARY_MARKER, TAKEAWAYS_MARKER};

/// Build a deterministic summarization prompt for a news article.
///
/// The article text is embedded verbatim; the requested output format uses
/// the same literal section markers the extractor splits on, so the prompt
/// and the parser cannot drift apart. The format request is advisory only:
/// the model may still reply in another shape, which the extractor reports
/// as a format error.
pub fn build_summary_prompt(article_text: &str) -> String {
    let categories = CATEGORIES.join(", ");
    format!(
        "Read the following news article and perform the following tasks:\n\
\n\
1. Summarize the article in 3-5 concise sentences.\n\
2. Extract the key takeaways as a numbered list.\n\
3. Classify the news into a category from the following list:\n\
   {categories}.\n\
\n\
Article:\n\
{article_text}\n\
\n\
Format the response exactly like this:\n\
{SUMMARY_MARKER}[Your summary here]\n\
{TAKEAWAYS_MARKER}\n\
  1. [Takeaway 1]\n\
  2. [Takeaway 2]\n\
  3. [Takeaway 3]\n\
{CATEGORY_MARKER} [One of {categories}]"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_article_verbatim() {
        let article = "Stocks rose today.\nInvestors cheered.";
        let prompt = build_summary_prompt(article);
        assert!(prompt.contains(article));
    }

    #[test]
    fn prompt_contains_markers_in_order() {
        let prompt = build_summary_prompt("some article");
        let summary = prompt.find(SUMMARY_MARKER).unwrap();
        let takeaways = prompt.find(TAKEAWAYS_MARKER).unwrap();
        let category = prompt.find(CATEGORY_MARKER).unwrap();
        assert!(summary < takeaways);
        assert!(takeaways < category);
    }

    #[test]
    fn prompt_lists_all_categories() {
        let prompt = build_summary_prompt("");
        for category in CATEGORIES {
            assert!(prompt.contains(category), "missing category {category}");
        }
    }

    #[test]
    fn empty_article_is_accepted() {
        let prompt = build_summary_prompt("");
        assert!(prompt.contains("Article:\n\n"));
    }

    #[test]
    fn article_containing_markers_is_still_embedded() {
        let article = "The report said \"- Summary: none\" verbatim.";
        let prompt = build_summary_prompt(article);
        assert!(prompt.contains(article));
    }
}
