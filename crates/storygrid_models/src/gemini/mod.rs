//! Google Gemini REST client.
//!
//! [`GeminiClient`] speaks the `generateContent` endpoint directly. Text and
//! inline image parts go in both directions, and image output is requested
//! through `generationConfig.imageConfig`.

mod client;
mod conversion;
mod dto;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient};
pub use conversion::{from_gemini_response, to_gemini_request};
pub use dto::{
    ApiErrorBody, ApiErrorEnvelope, Candidate, Content, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, ImageConfigDto, InlineData, InlineDataPart, Part,
    PromptFeedback, TextPart, UsageMetadata,
};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, storygrid_error::GeminiError>;
