//! Errors raised by the storyboard orchestrator before or instead of a request.

/// Orchestrator error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StudioErrorKind {
    /// Product keyword is blank
    #[display("Product keyword is required")]
    MissingKeyword,
    /// Raw script is blank
    #[display("Script is empty")]
    EmptyScript,
    /// Every scene description is empty
    #[display("Please provide scene descriptions first.")]
    NoSceneDescriptions,
    /// An operation of the same category is still pending
    #[display("{} is already in progress", _0)]
    Busy(String),
    /// Retry requested for an operation that never ran
    #[display("Nothing to retry for {}", _0)]
    NothingToRetry(String),
    /// The string does not name one of C01..C06
    #[display("Unknown scene id: {}", _0)]
    UnknownScene(String),
}

/// Orchestrator error with location tracking.
///
/// # Examples
///
/// ```
/// use storygrid_error::{StudioError, StudioErrorKind};
///
/// let err = StudioError::new(StudioErrorKind::Busy("Translation".to_string()));
/// assert!(err.to_string().contains("Translation is already in progress"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Studio Error: {} at line {} in {}", kind, line, file)]
pub struct StudioError {
    /// The kind of error that occurred
    pub kind: StudioErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StudioError {
    /// Create a new studio error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StudioErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
