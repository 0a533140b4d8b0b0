//! Filesystem artifact store.

use crate::{ArtifactStore, artifact_file_name};
use std::path::{Path, PathBuf};
use storygrid_error::{StorageError, StorageErrorKind, StoryGridResult};

/// Writes storyboards into a directory as `storyboard-grid-<millis>.png`.
///
/// ```text
/// ./exports/
/// ├── storyboard-grid-1760900000000.png
/// └── storyboard-grid-1760900042517.png
/// ```
#[derive(Debug, Clone)]
pub struct FileSystemArtifactStore {
    base_path: PathBuf,
}

impl FileSystemArtifactStore {
    /// Create a store rooted at `base_path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> StoryGridResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::debug!(path = %base_path.display(), "Opened artifact directory");
        Ok(Self { base_path })
    }

    /// Directory artifacts are written to.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Write `png` under the name for `unix_millis`.
    ///
    /// Goes through a temporary file and a rename so a reader never sees a
    /// partial image. The temporary file is removed if the rename fails.
    #[tracing::instrument(skip(self, png), fields(size = png.len()))]
    pub async fn export_at(&self, png: &[u8], unix_millis: i64) -> StoryGridResult<PathBuf> {
        let path = self.base_path.join(artifact_file_name(unix_millis));
        let temp_path = path.with_extension("png.tmp");

        tokio::fs::write(&temp_path, png).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&temp_path).await {
                tracing::warn!(
                    path = %temp_path.display(),
                    error = %cleanup,
                    "Failed to remove temporary export"
                );
            }
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
            .into());
        }

        tracing::info!(path = %path.display(), size = png.len(), "Exported storyboard");
        Ok(path)
    }
}

#[async_trait::async_trait]
impl ArtifactStore for FileSystemArtifactStore {
    async fn export(&self, png: &[u8]) -> StoryGridResult<PathBuf> {
        self.export_at(png, chrono::Utc::now().timestamp_millis()).await
    }
}
