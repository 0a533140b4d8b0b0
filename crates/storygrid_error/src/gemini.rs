//! Errors from the Gemini generation service.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// The request never produced an HTTP response
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// Non-success HTTP status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Message reported by the service
        message: String,
    },
    /// Response body did not match the expected shape
    #[display("Invalid Gemini response: {}", _0)]
    InvalidResponse(String),
    /// Inline image payload was not valid base64
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
    /// The response carried no inline image part
    #[display("Generation failed - no image data returned.")]
    NoImageData,
}

impl GeminiErrorKind {
    /// Whether the failure is transient (rate limit, overload, gateway).
    ///
    /// StoryGrid never retries on its own; this only informs the message a
    /// caller shows next to its "try again" action.
    pub fn is_retryable(&self) -> bool {
        match self {
            GeminiErrorKind::HttpError { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            GeminiErrorKind::ApiRequest(_) => true,
            _ => false,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use storygrid_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::NoImageData);
/// assert!(err.to_string().contains("no image data returned"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_statuses_are_retryable() {
        for status_code in [408, 429, 500, 502, 503, 504] {
            let kind = GeminiErrorKind::HttpError {
                status_code,
                message: String::new(),
            };
            assert!(kind.is_retryable(), "{status_code} should be transient");
        }
    }

    #[test]
    fn client_errors_are_permanent() {
        let kind = GeminiErrorKind::HttpError {
            status_code: 400,
            message: "bad request".to_string(),
        };
        assert!(!kind.is_retryable());
        assert!(!GeminiErrorKind::NoImageData.is_retryable());
        assert!(!GeminiErrorKind::MissingApiKey.is_retryable());
    }
}
