//! Tests for reference loading and artifact export.

use storygrid_core::DataUrl;
use storygrid_error::{StorageErrorKind, StoryGridErrorKind};
use storygrid_storage::{ArtifactStore, FileSystemArtifactStore, load_reference_image};
use tempfile::TempDir;

const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

#[tokio::test]
async fn test_reference_image_becomes_data_url() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("mug.JPG");
    std::fs::write(&path, b"\xFF\xD8\xFF\xE0fake jpeg")?;

    let reference = load_reference_image(&path).await?;
    assert!(reference.starts_with("data:image/jpeg;base64,"));

    let parsed = DataUrl::parse(&reference)?;
    assert_eq!(parsed.decode()?, b"\xFF\xD8\xFF\xE0fake jpeg");
    Ok(())
}

#[tokio::test]
async fn test_reference_image_is_not_validated() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("notes.txt");
    std::fs::write(&path, b"definitely not an image")?;

    let reference = load_reference_image(&path).await?;
    assert!(reference.starts_with("data:image/png;base64,"));
    Ok(())
}

#[tokio::test]
async fn test_missing_reference_image_is_read_error() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let err = load_reference_image(temp_dir.path().join("absent.png"))
        .await
        .expect_err("missing file should fail");

    assert!(matches!(
        err.kind(),
        StoryGridErrorKind::Storage(e) if matches!(e.kind, StorageErrorKind::FileRead(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_export_writes_bytes_unmodified() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileSystemArtifactStore::new(temp_dir.path())?;

    let path = store.export_at(&PNG_MAGIC, 1_760_900_000_000).await?;

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("storyboard-grid-1760900000000.png")
    );
    assert_eq!(std::fs::read(&path)?, PNG_MAGIC);

    let leftovers: Vec<_> = std::fs::read_dir(temp_dir.path())?
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_export_names_file_by_current_time() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileSystemArtifactStore::new(temp_dir.path().join("nested/out"))?;

    let before = chrono::Utc::now().timestamp_millis();
    let path = store.export(&PNG_MAGIC).await?;
    let after = chrono::Utc::now().timestamp_millis();

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .expect("export path has a file name");
    let millis: i64 = name
        .strip_prefix("storyboard-grid-")
        .and_then(|rest| rest.strip_suffix(".png"))
        .expect("name follows the storyboard pattern")
        .parse()?;
    assert!((before..=after).contains(&millis));
    assert!(path.starts_with(store.base_path()));
    Ok(())
}

#[tokio::test]
async fn test_store_rejects_file_as_directory() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, b"x")?;

    let err = FileSystemArtifactStore::new(blocker.join("out")).expect_err("cannot nest under a file");
    assert!(matches!(
        err.kind(),
        StoryGridErrorKind::Storage(e) if matches!(e.kind, StorageErrorKind::DirectoryCreation(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_failed_rename_removes_temporary_file() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let store = FileSystemArtifactStore::new(temp_dir.path())?;

    // A directory already holding the final name makes the rename fail.
    std::fs::create_dir(temp_dir.path().join("storyboard-grid-42.png"))?;
    std::fs::write(temp_dir.path().join("storyboard-grid-42.png/keep"), b"x")?;

    let err = store
        .export_at(&PNG_MAGIC, 42)
        .await
        .expect_err("rename onto a directory should fail");
    assert!(matches!(
        err.kind(),
        StoryGridErrorKind::Storage(e) if matches!(e.kind, StorageErrorKind::FileWrite(_))
    ));
    assert!(!temp_dir.path().join("storyboard-grid-42.png.tmp").exists());
    Ok(())
}
