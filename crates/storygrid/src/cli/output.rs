//! Terminal rendering of scenes.

use super::OutputFormat;
use storygrid::{JsonError, SceneRegistry, StoryGridError, StoryGridResult};

/// Render scenes for the terminal.
///
/// Human output is one `C0n: description` line per slot with `(empty)` for
/// blank slots. JSON output is an array of `{ "id", "description" }` objects.
pub fn render_scenes(scenes: &SceneRegistry, format: OutputFormat) -> StoryGridResult<String> {
    match format {
        OutputFormat::Human => Ok(scenes
            .iter()
            .map(|scene| {
                let description = if scene.description().is_empty() {
                    "(empty)"
                } else {
                    scene.description().as_str()
                };
                format!("{}: {}", scene.id(), description)
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let items: Vec<_> = scenes
                .iter()
                .map(|scene| {
                    serde_json::json!({
                        "id": scene.id().to_string(),
                        "description": scene.description(),
                    })
                })
                .collect();
            serde_json::to_string_pretty(&items).map_err(|e| {
                StoryGridError::from(JsonError::new(format!("Failed to serialize scenes: {}", e)))
            })
        }
    }
}
