use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn summarize_subcommand_is_available() {
    let output = Command::new(env!("CARGO_BIN_EXE_newsbrief"))
        .args(["summarize", "--help"])
        .output()
        .expect("failed to execute newsbrief");

    assert!(
        output.status.success(),
        "summarize --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn summarize_reports_missing_article_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_newsbrief"))
        .args(["summarize", "does-not-exist.txt"])
        .output()
        .expect("failed to execute newsbrief");

    assert!(
        !output.status.success(),
        "summarize should fail for a missing file\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read article file"),
        "expected missing file error, got:\n{}",
        stderr
    );
}

#[test]
fn summarize_without_api_key_reports_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let article = dir.path().join("article.txt");
    std::fs::write(&article, "Stocks rose today.").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_newsbrief"))
        .arg("summarize")
        .arg(&article)
        .env_remove("NEWSBRIEF_GROQ_API_KEY")
        .output()
        .expect("failed to execute newsbrief");

    assert!(
        !output.status.success(),
        "summarize should fail without an API key\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Groq API key is missing"),
        "expected missing API key error, got:\n{}",
        stderr
    );
}

#[test]
fn summarize_reads_article_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_newsbrief"))
        .arg("summarize")
        .env_remove("NEWSBRIEF_GROQ_API_KEY")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn newsbrief");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"Stocks rose today.")
        .unwrap();

    let output = child.wait_with_output().expect("failed to wait on newsbrief");

    // Without an API key the run still fails, but only after stdin was
    // consumed; the failure must be the configuration one, not an IO one.
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Groq API key is missing"),
        "expected missing API key error, got:\n{}",
        stderr
    );
}
