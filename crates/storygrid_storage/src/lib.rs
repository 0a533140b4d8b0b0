//! File input and output for StoryGrid.
//!
//! Two directions only: a reference image is read from disk into a `data:`
//! URL before it is sent to the model, and a finished composite is written
//! out as `storyboard-grid-<unix millis>.png`.
//!
//! # Example
//!
//! ```rust
//! use storygrid_storage::{ArtifactStore, FileSystemArtifactStore, load_reference_image};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reference = load_reference_image("mug.jpg").await?;
//! assert!(reference.starts_with("data:image/jpeg;base64,"));
//!
//! let store = FileSystemArtifactStore::new("./exports")?;
//! let path = store.export(&[0x89, 0x50, 0x4E, 0x47]).await?;
//! println!("saved {}", path.display());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod filesystem;
mod media_type;
mod reference;

pub use artifact::{ARTIFACT_PREFIX, ArtifactStore, artifact_file_name};
pub use filesystem::FileSystemArtifactStore;
pub use media_type::{ImageFormat, mime_for_path};
pub use reference::load_reference_image;
pub use storygrid_error::{StorageError, StorageErrorKind};
