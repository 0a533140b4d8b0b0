//! `data:` URLs, the format reference images and composites travel in.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use storygrid_error::{StorageError, StorageErrorKind, StoryGridResult};

const DEFAULT_MIME: &str = "image/png";

/// A base64 `data:` URL split into MIME type and payload.
///
/// # Examples
///
/// ```
/// use storygrid_core::DataUrl;
///
/// let url = DataUrl::from_bytes("image/png", &[0x89, 0x50, 0x4E, 0x47]);
/// assert_eq!(url.to_string(), "data:image/png;base64,iVBORw==");
///
/// let parsed = DataUrl::parse(&url.to_string()).unwrap();
/// assert_eq!(parsed.decode().unwrap(), vec![0x89, 0x50, 0x4E, 0x47]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("data:{};base64,{}", mime, payload)]
pub struct DataUrl {
    mime: String,
    payload: String,
}

impl DataUrl {
    /// Encode bytes under the given MIME type.
    pub fn from_bytes(mime: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime: mime.into(),
            payload: STANDARD.encode(bytes),
        }
    }

    /// Wrap an already-encoded payload.
    pub fn from_base64(mime: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            payload: payload.into(),
        }
    }

    /// Strictly parse `data:<mime>;base64,<payload>`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the prefix, the `;base64` marker or the
    /// comma separator is missing.
    pub fn parse(url: &str) -> StoryGridResult<Self> {
        let invalid = || StorageError::new(StorageErrorKind::InvalidDataUrl(truncate(url)));

        let rest = url.strip_prefix("data:").ok_or_else(invalid)?;
        let (header, payload) = rest.split_once(',').ok_or_else(invalid)?;
        let mime = header.strip_suffix(";base64").ok_or_else(invalid)?;
        let mime = if mime.is_empty() { DEFAULT_MIME } else { mime };

        Ok(Self::from_base64(mime, payload))
    }

    /// Leniently split a reference-image string for upload.
    ///
    /// The payload is whatever follows the first comma, or the whole string
    /// when there is no comma or nothing after it. The MIME type comes from a
    /// `data:<mime>;...` header when present and defaults to `image/png`.
    ///
    /// ```
    /// use storygrid_core::DataUrl;
    ///
    /// let url = DataUrl::lenient("data:image/jpeg;base64,/9j/4AAQ");
    /// assert_eq!(url.mime(), "image/jpeg");
    /// assert_eq!(url.payload(), "/9j/4AAQ");
    ///
    /// let bare = DataUrl::lenient("iVBORw0KGgo=");
    /// assert_eq!(bare.mime(), "image/png");
    /// assert_eq!(bare.payload(), "iVBORw0KGgo=");
    /// ```
    pub fn lenient(reference: &str) -> Self {
        let payload = match reference.split(',').nth(1) {
            Some(segment) if !segment.is_empty() => segment,
            _ => reference,
        };

        let mime = reference
            .strip_prefix("data:")
            .and_then(|rest| rest.split([';', ',']).next())
            .filter(|mime| !mime.is_empty())
            .unwrap_or(DEFAULT_MIME);

        Self::from_base64(mime, payload)
    }

    /// MIME type.
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Base64 payload.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Decode the payload.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the payload is not valid standard base64.
    pub fn decode(&self) -> StoryGridResult<Vec<u8>> {
        STANDARD
            .decode(self.payload.as_bytes())
            .map_err(|e| StorageError::new(StorageErrorKind::Base64Decode(e.to_string())).into())
    }
}

fn truncate(url: &str) -> String {
    url.chars().take(48).collect()
}
