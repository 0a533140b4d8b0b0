//! REST client for the Gemini `generateContent` endpoint.
//!
//! # Example
//!
//! ```no_run
//! use storygrid_core::{GenerateRequest, Input, Message};
//! use storygrid_interface::{GenerationDriver, extract_text};
//! use storygrid_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//!
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user(vec![Input::Text("Hello".to_string())])])
//!     .model("gemini-3-flash-preview".to_string())
//!     .build()?;
//!
//! let response = client.generate(&request).await?;
//! println!("{}", extract_text(&response));
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::env;
use tracing::{debug, info, instrument, warn};

use storygrid_core::{GenerateRequest, GenerateResponse};
use storygrid_error::{GeminiError, GeminiErrorKind, StoryGridResult};
use storygrid_interface::GenerationDriver;

use super::GeminiResult;
use super::conversion::{from_gemini_response, to_gemini_request};
use super::dto::{ApiErrorEnvelope, GenerateContentResponse};

/// Public Gemini API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Text model used when neither the request nor the client names one.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Gemini REST API.
///
/// Each request may name its own model through `GenerateRequest::model`;
/// otherwise the client's default model is used. A request is sent once.
/// Failures surface as [`GeminiError`]s without retrying.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client with the API key from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] if the variable is unset or
    /// empty.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> StoryGridResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Ok(Self::with_api_key(api_key))
    }

    /// Create a client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model_name: DEFAULT_MODEL.to_string(),
        }
    }

    /// Point the client at a different API root (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Change the default model.
    pub fn with_model(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// API root in use.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint for a model, accepting names with or without `models/`.
    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Turn a non-success response body into an error.
    ///
    /// Uses the service's `error.message` when the body is the usual envelope
    /// and the raw body otherwise.
    fn parse_api_error(status_code: u16, body: &str) -> GeminiError {
        let message = serde_json::from_str::<ApiErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("status {}", status_code)
                } else {
                    trimmed.to_string()
                }
            });
        GeminiError::new(GeminiErrorKind::HttpError {
            status_code,
            message,
        })
    }

    #[instrument(skip_all, fields(model = %model))]
    async fn generate_internal(
        &self,
        model: &str,
        req: &GenerateRequest,
    ) -> GeminiResult<GenerateResponse> {
        let body = to_gemini_request(req);
        let url = self.endpoint(model);

        debug!(
            parts = body.contents.iter().map(|c| c.parts.len()).sum::<usize>(),
            image = body.generation_config.as_ref().is_some_and(|c| c.image_config.is_some()),
            "Sending Gemini request"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Gemini API returned an error");
            return Err(Self::parse_api_error(status.as_u16(), &text));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GeminiError::new(GeminiErrorKind::InvalidResponse(e.to_string())))?;

        if let Some(reason) = parsed
            .prompt_feedback()
            .as_ref()
            .and_then(|feedback| feedback.block_reason().as_deref())
        {
            warn!(reason, "Gemini blocked the prompt");
        }

        let converted = from_gemini_response(&parsed)?;

        info!(
            outputs = converted.outputs.len(),
            total_tokens = parsed.usage_metadata().as_ref().and_then(|u| *u.total_token_count()),
            "Gemini request completed"
        );
        Ok(converted)
    }
}

#[async_trait]
impl GenerationDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> StoryGridResult<GenerateResponse> {
        let model = req.model().as_deref().unwrap_or(&self.model_name);
        self.generate_internal(model, req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
