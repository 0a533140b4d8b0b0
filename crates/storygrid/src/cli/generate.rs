//! Generation command handlers.

use super::{OutputFormat, emit, gemini_client, output::render_scenes, read_script};
use std::path::Path;
use storygrid::{
    ArtifactStore, FileSystemArtifactStore, SceneId, StoryGridResult, Studio, StudioConfig,
    load_reference_image,
};

/// Generate a script for a product and print or save it.
#[tracing::instrument(skip(config, description))]
pub async fn write_script(
    config: &StudioConfig,
    keyword: String,
    description: Option<String>,
    out: Option<&Path>,
) -> StoryGridResult<()> {
    let studio = Studio::new(gemini_client(config)?, config)?;
    studio.set_product_keyword(keyword);
    studio.set_product_description(description.unwrap_or_default());

    let script = studio.generate_script().await?;
    emit(&script, out)
}

/// Translate a script file and print or save the result.
#[tracing::instrument(skip(config))]
pub async fn translate(config: &StudioConfig, file: &Path, out: Option<&Path>) -> StoryGridResult<()> {
    let studio = Studio::new(gemini_client(config)?, config)?;
    studio.set_script(read_script(file)?);

    let translated = studio.translate_script().await?;
    emit(&translated, out)
}

/// Rewrite one scene of a script file and print all scenes.
#[tracing::instrument(skip(config, description))]
pub async fn refine(
    config: &StudioConfig,
    file: &Path,
    scene: SceneId,
    keyword: String,
    description: Option<String>,
) -> StoryGridResult<()> {
    let studio = Studio::new(gemini_client(config)?, config)?;
    studio.set_script(read_script(file)?);
    studio.set_product_keyword(keyword);
    studio.set_product_description(description.unwrap_or_default());

    studio.refine_scene(scene).await?;
    println!("{}", render_scenes(&studio.scenes(), OutputFormat::Human)?);
    Ok(())
}

/// Render the storyboard grid for a script file and export it.
#[tracing::instrument(skip(config))]
pub async fn grid(
    config: &StudioConfig,
    file: &Path,
    reference: Option<&Path>,
    out_dir: Option<&Path>,
) -> StoryGridResult<()> {
    let studio = Studio::new(gemini_client(config)?, config)?;
    studio.set_script(read_script(file)?);

    if let Some(reference) = reference {
        studio.set_reference_image(load_reference_image(reference).await?);
    }

    let composite = studio.generate_composite().await?;

    let store = FileSystemArtifactStore::new(out_dir.unwrap_or(config.output.directory.as_path()))?;
    let path = store.export(composite.bytes()).await?;
    println!("{}", path.display());
    Ok(())
}
