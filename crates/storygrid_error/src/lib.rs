//! Error types for StoryGrid.
//!
//! Every error in the workspace follows the same shape:
//! - a `*ErrorKind` enum naming the specific condition
//! - a `*Error` struct wrapping the kind with the source location it was raised at
//! - `#[track_caller]` constructors so the location is captured automatically
//!
//! All of them convert into [`StoryGridError`], so `?` works across crate boundaries.
//!
//! # Examples
//!
//! ```
//! use storygrid_error::{StoryGridResult, StudioError, StudioErrorKind};
//!
//! fn needs_keyword(keyword: &str) -> StoryGridResult<()> {
//!     if keyword.trim().is_empty() {
//!         Err(StudioError::new(StudioErrorKind::MissingKeyword))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(needs_keyword("  ").is_err());
//! assert!(needs_keyword("coffee").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod error;
mod gemini;
mod located;
mod storage;
mod studio;

pub use builder::{BuilderError, BuilderErrorKind};
pub use error::{StoryGridError, StoryGridErrorKind, StoryGridResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use located::{ConfigError, JsonError};
pub use storage::{StorageError, StorageErrorKind};
pub use studio::{StudioError, StudioErrorKind};
