//! Loading a reference image from disk.

use crate::mime_for_path;
use std::path::Path;
use storygrid_core::DataUrl;
use storygrid_error::{StorageError, StorageErrorKind, StoryGridResult};

/// Read an image file and return it as a `data:` URL.
///
/// The MIME type comes from the file extension. Format and size are not
/// validated; the service is the judge of what it accepts.
///
/// # Errors
///
/// Returns [`StorageErrorKind::FileRead`] if the file cannot be read.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub async fn load_reference_image(path: impl AsRef<Path>) -> StoryGridResult<String> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileRead(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    let mime = mime_for_path(path);
    tracing::debug!(size = bytes.len(), mime, "Loaded reference image");
    Ok(DataUrl::from_bytes(mime, &bytes).to_string())
}
