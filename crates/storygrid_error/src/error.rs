//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError, GeminiError, JsonError, StorageError, StudioError};

/// Every error the workspace can produce.
///
/// # Examples
///
/// ```
/// use storygrid_error::{ConfigError, StoryGridError};
///
/// let err: StoryGridError = ConfigError::new("missing [models] table").into();
/// assert!(err.to_string().contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryGridErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Generation service error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// File input/output error
    #[from(StorageError)]
    Storage(StorageError),
    /// Orchestrator precondition error
    #[from(StudioError)]
    Studio(StudioError),
}

/// StoryGrid error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("StoryGrid Error: {}", _0)]
pub struct StoryGridError(Box<StoryGridErrorKind>);

impl StoryGridError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryGridErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryGridErrorKind {
        &self.0
    }

    /// Short human-readable message without location details.
    ///
    /// This is what ends up in the orchestrator's shared error slot.
    ///
    /// ```
    /// use storygrid_error::{GeminiError, GeminiErrorKind, StoryGridError};
    ///
    /// let err: StoryGridError = GeminiError::new(GeminiErrorKind::NoImageData).into();
    /// assert_eq!(err.user_message(), "Generation failed - no image data returned.");
    /// ```
    pub fn user_message(&self) -> String {
        match self.kind() {
            StoryGridErrorKind::Json(e) => e.message.clone(),
            StoryGridErrorKind::Config(e) => e.message.clone(),
            StoryGridErrorKind::Builder(e) => e.kind().to_string(),
            StoryGridErrorKind::Gemini(e) => e.kind.to_string(),
            StoryGridErrorKind::Storage(e) => e.kind.to_string(),
            StoryGridErrorKind::Studio(e) => e.kind.to_string(),
        }
    }
}

impl<T> From<T> for StoryGridError
where
    T: Into<StoryGridErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for StoryGrid operations.
pub type StoryGridResult<T> = std::result::Result<T, StoryGridError>;
