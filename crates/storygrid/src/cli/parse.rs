//! Script parsing command handler.

use super::{OutputFormat, output::render_scenes, read_script};
use std::path::Path;
use storygrid::{ScriptParser, StoryGridResult, StudioConfig};

/// Parse a script file and print its scenes.
#[tracing::instrument(skip(config))]
pub fn parse_script(config: &StudioConfig, file: &Path, format: OutputFormat) -> StoryGridResult<()> {
    let parser = ScriptParser::new(&config.parser)?;
    let scenes = parser.parse(&read_script(file)?);
    println!("{}", render_scenes(&scenes, format)?);
    Ok(())
}
