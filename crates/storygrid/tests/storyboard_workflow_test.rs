//! End-to-end workflow through the facade with an in-process backend.

use async_trait::async_trait;
use storygrid::{
    ArtifactStore, FileSystemArtifactStore, GenerateRequest, GenerateResponse, GenerationDriver,
    Output, SceneId, StoryGridResult, Studio, StudioConfig, load_reference_image,
};
use tempfile::TempDir;

/// Answers text requests with a fixed script and image requests with a PNG.
struct StoryboardBackend;

const SCRIPT: &str = "Scene C01: Alarm rings at dawn\nScene C02: Hand reaches for the mug\n\
                      镜头C03：咖啡倒入杯中\nC04: Steam rises\nC05: First sip, smile\nC06: Logo";
const PNG: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

#[async_trait]
impl GenerationDriver for StoryboardBackend {
    async fn generate(&self, req: &GenerateRequest) -> StoryGridResult<GenerateResponse> {
        let outputs = if req.image_config().is_some() {
            vec![Output::Image {
                mime: Some("image/png".to_string()),
                data: PNG.to_vec(),
            }]
        } else {
            vec![Output::Text(SCRIPT.to_string())]
        };
        Ok(GenerateResponse { outputs })
    }

    fn provider_name(&self) -> &'static str {
        "in-process"
    }

    fn model_name(&self) -> &str {
        "storyboard-backend"
    }
}

#[tokio::test]
async fn test_script_to_exported_grid() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let reference_path = temp_dir.path().join("mug.png");
    std::fs::write(&reference_path, PNG)?;

    let studio = Studio::new(StoryboardBackend, &StudioConfig::default())?;
    studio.set_product_keyword("Morning Coffee");

    studio.generate_script().await?;
    let scenes = studio.scenes();
    assert_eq!(scenes.get(SceneId::C01).description(), "Alarm rings at dawn");
    assert_eq!(scenes.get(SceneId::C03).description(), "咖啡倒入杯中");
    assert_eq!(scenes.get(SceneId::C06).description(), "Logo");

    studio.set_reference_image(load_reference_image(&reference_path).await?);
    let grid = studio.generate_composite().await?;

    let store = FileSystemArtifactStore::new(temp_dir.path().join("exports"))?;
    let path = store.export(grid.bytes()).await?;

    assert_eq!(std::fs::read(&path)?, PNG);
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    assert!(name.starts_with("storyboard-grid-") && name.ends_with(".png"));
    Ok(())
}

#[test]
fn test_rendered_scenes_reparse_identically() -> anyhow::Result<()> {
    let parser = storygrid::ScriptParser::new(&storygrid::LabelConfig::default())?;
    let scenes = parser.parse(SCRIPT);
    assert_eq!(parser.parse(&scenes.to_script()), scenes);
    Ok(())
}
