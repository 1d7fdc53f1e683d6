//! CLI command implementations

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::summarizer::Summarizer;
use crate::web::{self, AppState};

/// Summarize an article from a file or stdin and print the result.
pub async fn summarize_article(settings: &Settings, file: Option<PathBuf>) -> Result<()> {
    let article_text = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read article file: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read article text from stdin")?;
            buffer
        }
    };

    let summarizer = Summarizer::from_settings(settings)?;
    let result = summarizer.summarize(&article_text).await?;

    println!("Summary: {}", result.summary);
    println!();
    println!("{}", result.key_takeaways);
    println!();
    println!("Category: {}", result.category);

    Ok(())
}

/// Launch the web UI.
pub async fn serve(settings: &Settings, host: Option<String>, port: Option<u16>) -> Result<()> {
    let summarizer = Summarizer::from_settings(settings)?;

    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);

    web::serve(AppState { summarizer }, &host, port).await
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
