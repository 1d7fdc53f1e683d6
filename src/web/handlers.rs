use axum::{extract::State, response::Html, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub article_text: String,
}

/// The two display fields of the UI: the summary-and-takeaways block and
/// the category label.
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub category: String,
}

/// Serve the single-page form.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Run the summarization pipeline for the posted article text.
///
/// Faults do not get a distinct status: the error message takes the place
/// of the summary block and the category reads "Error", mirroring the two
/// output panes of the form.
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SummarizeRequest>,
) -> Json<SummarizeResponse> {
    match state.summarizer.summarize(&request.article_text).await {
        Ok(result) => Json(SummarizeResponse {
            summary: format!("Summary: {}\n\n{}", result.summary, result.key_takeaways),
            category: result.category,
        }),
        Err(e) => {
            tracing::warn!("Summarization failed: {}", e);
            Json(SummarizeResponse {
                summary: e.to_string(),
                category: "Error".to_string(),
            })
        }
    }
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>newsbrief - AI-Powered News Summarizer</title>
<style>
  body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
  textarea { width: 100%; box-sizing: border-box; }
  pre { background: #f4f4f4; padding: 1rem; white-space: pre-wrap; }
</style>
</head>
<body>
<h1>newsbrief</h1>
<p>Enter a news article, and AI will summarize it for you.</p>
<textarea id="article" rows="10" placeholder="Paste news article text here..."></textarea>
<p><button id="go">Summarize</button></p>
<h2>News Summary &amp; Key Takeaways</h2>
<pre id="summary"></pre>
<h2>News Category</h2>
<pre id="category"></pre>
<script>
document.getElementById('go').addEventListener('click', async () => {
  const article_text = document.getElementById('article').value;
  document.getElementById('summary').textContent = 'Summarizing...';
  document.getElementById('category').textContent = '';
  const res = await fetch('/api/summarize', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ article_text }),
  });
  const data = await res.json();
  document.getElementById('summary').textContent = data.summary;
  document.getElementById('category').textContent = data.category;
});
</script>
</body>
</html>
"#;
