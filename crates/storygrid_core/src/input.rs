//! Input parts of a generation request.

use crate::MediaSource;
use serde::{Deserialize, Serialize};

/// One part of a user turn.
///
/// # Examples
///
/// ```
/// use storygrid_core::{Input, MediaSource};
///
/// let prompt = Input::Text("Draw six frames".to_string());
/// let reference = Input::Image {
///     mime: Some("image/png".to_string()),
///     source: MediaSource::Base64("iVBORw0KGgo=".to_string()),
/// };
/// assert!(prompt.as_text().is_some());
/// assert!(reference.as_text().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text prompt.
    Text(String),

    /// Inline image, e.g. a product reference shot.
    Image {
        /// MIME type, e.g. "image/png"
        mime: Option<String>,
        /// Image payload
        source: MediaSource,
    },
}

impl Input {
    /// The text of a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Input::Text(text) => Some(text),
            Input::Image { .. } => None,
        }
    }
}
