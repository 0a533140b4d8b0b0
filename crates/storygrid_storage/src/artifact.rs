//! Artifact export trait.

use async_trait::async_trait;
use std::path::PathBuf;
use storygrid_error::StoryGridResult;

/// File name prefix for exported storyboards.
pub const ARTIFACT_PREFIX: &str = "storyboard-grid-";

/// Name for a storyboard exported at the given Unix time in milliseconds.
///
/// ```
/// use storygrid_storage::artifact_file_name;
///
/// assert_eq!(artifact_file_name(1_700_000_000_123), "storyboard-grid-1700000000123.png");
/// ```
pub fn artifact_file_name(unix_millis: i64) -> String {
    format!("{}{}.png", ARTIFACT_PREFIX, unix_millis)
}

/// Destination for finished composite images.
///
/// Implementations write the bytes they are handed without re-encoding.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Write a PNG and return where it landed.
    async fn export(&self, png: &[u8]) -> StoryGridResult<PathBuf>;
}
