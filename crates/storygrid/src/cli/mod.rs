//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storygrid binary.

mod commands;
mod generate;
mod output;
mod parse;

pub use commands::{Cli, Commands, OutputFormat};

use std::path::Path;
use storygrid::{
    GeminiClient, StorageError, StorageErrorKind, StoryGridError, StoryGridResult, StudioConfig,
};

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> StoryGridResult<()> {
    let config = match &cli.config {
        Some(path) => StudioConfig::from_file(path)?,
        None => StudioConfig::load()?,
    };

    match cli.command {
        Commands::Parse { file, format } => parse::parse_script(&config, &file, format),
        Commands::Script {
            keyword,
            description,
            out,
        } => generate::write_script(&config, keyword, description, out.as_deref()).await,
        Commands::Translate { file, out } => {
            generate::translate(&config, &file, out.as_deref()).await
        }
        Commands::Refine {
            file,
            scene,
            keyword,
            description,
        } => generate::refine(&config, &file, scene, keyword, description).await,
        Commands::Grid {
            file,
            reference,
            out_dir,
        } => generate::grid(&config, &file, reference.as_deref(), out_dir.as_deref()).await,
    }
}

/// Gemini client configured from the studio settings.
fn gemini_client(config: &StudioConfig) -> StoryGridResult<GeminiClient> {
    let client = GeminiClient::new()?.with_model(config.models.text.clone());
    Ok(match &config.gemini.base_url {
        Some(base_url) => client.with_base_url(base_url.clone()),
        None => client,
    })
}

/// Read a script file.
fn read_script(path: &Path) -> StoryGridResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        StoryGridError::from(StorageError::new(StorageErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        ))))
    })
}

/// Write text to a file, or to stdout when no path is given.
fn emit(text: &str, out: Option<&Path>) -> StoryGridResult<()> {
    match out {
        Some(path) => {
            std::fs::write(path, text).map_err(|e| {
                StoryGridError::from(StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    path.display(),
                    e
                ))))
            })?;
            tracing::info!(path = %path.display(), "Wrote script");
        }
        None => println!("{}", text),
    }
    Ok(())
}
