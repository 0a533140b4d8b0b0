//! Generation service integrations for StoryGrid.
//!
//! Each provider sits behind its own feature flag. Gemini is the only
//! provider and is enabled by default.
//!
//! ```toml
//! [dependencies]
//! storygrid_models = { version = "0.1", features = ["gemini"] }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    ApiErrorBody, ApiErrorEnvelope, Candidate, Content, DEFAULT_BASE_URL, DEFAULT_MODEL,
    GeminiClient, GeminiResult, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageConfigDto, InlineData, InlineDataPart, Part, PromptFeedback, TextPart, UsageMetadata,
    from_gemini_response, to_gemini_request,
};
