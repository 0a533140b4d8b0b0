//! Request and response types for generation.

use crate::{Message, Output};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Image output options.
///
/// ```
/// use storygrid_core::ImageConfig;
///
/// assert_eq!(ImageConfig::default().aspect_ratio, "16:9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Aspect ratio such as "16:9"
    pub aspect_ratio: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: "16:9".to_string(),
        }
    }
}

/// A generation request.
///
/// # Examples
///
/// ```
/// use storygrid_core::{GenerateRequest, ImageConfig, Input, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user(vec![Input::Text("C01: close-up".to_string())])])
///     .model("gemini-2.5-flash-image".to_string())
///     .image_config(ImageConfig::default())
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model().as_deref(), Some("gemini-2.5-flash-image"));
/// assert!(request.image_config().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Builder, Getters)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    max_tokens: Option<u32>,
    /// Sampling temperature
    temperature: Option<f32>,
    /// Model identifier to use
    model: Option<String>,
    /// Present when an image is expected back
    image_config: Option<ImageConfig>,
}

impl GenerateRequest {
    /// Start building a request.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The unified response object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GenerateResponse {
    /// Content parts in the order the service returned them
    pub outputs: Vec<Output>,
}
