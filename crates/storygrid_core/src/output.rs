//! Output parts of a generation response.

use serde::{Deserialize, Serialize};

/// One content part returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Generated text.
    Text(String),

    /// Generated image.
    Image {
        /// MIME type reported by the service
        mime: Option<String>,
        /// Decoded image bytes
        data: Vec<u8>,
    },
}
