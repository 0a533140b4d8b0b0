//! Media payloads attached to requests.

use serde::{Deserialize, Serialize};

/// Where inline media content comes from.
///
/// # Examples
///
/// ```
/// use storygrid_core::MediaSource;
///
/// let encoded = MediaSource::Base64("iVBORw0KGgo=".to_string());
/// assert_eq!(encoded.to_base64(), "iVBORw0KGgo=");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaSource {
    /// Base64-encoded content, sent as-is
    Base64(String),
}

impl MediaSource {
    /// Standard base64 encoding of the content.
    pub fn to_base64(&self) -> String {
        match self {
            MediaSource::Base64(data) => data.clone(),
        }
    }
}
