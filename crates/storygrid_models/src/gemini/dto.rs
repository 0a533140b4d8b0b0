//! Wire types for the Gemini REST `generateContent` endpoint.
//!
//! ```text
//! POST {base}/models/{model}:generateContent
//! { "contents": [{ "role": "user", "parts": [{ "text": ... }, { "inlineData": { ... } }] }],
//!   "generationConfig": { "imageConfig": { "aspectRatio": "16:9" } } }
//! ```
//!
//! Response parts arrive in no fixed order and may include kinds StoryGrid
//! does not use; those deserialize as [`Part::Other`] and are skipped.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

//
// ─── REQUEST ────────────────────────────────────────────────────────────────
//

/// Body of a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns
    pub contents: Vec<Content>,

    /// Sampling and output options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A turn: a role plus content parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// "user" on requests, "model" on responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Content part (text, inline data, or something we ignore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Text content
    Text(TextPart),
    /// Inline binary data (images)
    InlineData(InlineDataPart),
    /// Any other part kind
    Other(serde_json::Value),
}

/// Text content part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPart {
    /// The text
    pub text: String,
}

/// Inline data content part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineDataPart {
    /// The payload
    pub inline_data: InlineData,
}

/// Base64 payload with its MIME type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// e.g. "image/png"
    pub mime_type: String,
    /// Standard base64
    pub data: String,
}

/// Generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Temperature for sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,

    /// Requested modalities, e.g. `["TEXT", "IMAGE"]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,

    /// Image output options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfigDto>,
}

/// Image output options on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfigDto {
    /// e.g. "16:9"
    pub aspect_ratio: String,
}

//
// ─── RESPONSE ───────────────────────────────────────────────────────────────
//

/// Body of a successful `generateContent` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates, usually exactly one
    #[serde(default)]
    candidates: Vec<Candidate>,

    /// Set when the prompt itself was blocked
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,

    /// Token accounting
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

/// One generated candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content; missing when the candidate was filtered
    #[serde(default)]
    content: Option<Content>,

    /// e.g. "STOP", "SAFETY"
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Why a prompt was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// e.g. "SAFETY"
    #[serde(default)]
    block_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt
    #[serde(default)]
    prompt_token_count: Option<u32>,
    /// Tokens across candidates
    #[serde(default)]
    candidates_token_count: Option<u32>,
    /// Total tokens
    #[serde(default)]
    total_token_count: Option<u32>,
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorEnvelope {
    /// The error body
    pub error: ApiErrorBody,
}

/// Error details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// HTTP status code echoed by the service
    #[serde(default)]
    pub code: Option<u16>,
    /// Human-readable message
    pub message: String,
    /// Canonical status name, e.g. "INVALID_ARGUMENT"
    #[serde(default)]
    pub status: Option<String>,
}
