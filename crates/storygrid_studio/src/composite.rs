//! The generated storyboard grid.

use storygrid_core::DataUrl;
use storygrid_interface::InlineImage;

/// A finished composite storyboard.
///
/// The image is always presented as `data:image/png;base64,...` regardless
/// of the MIME type the service reported; the bytes are kept as returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeImage {
    bytes: Vec<u8>,
    data_url: DataUrl,
}

impl CompositeImage {
    /// Wrap raw PNG bytes.
    pub fn from_png(bytes: Vec<u8>) -> Self {
        let data_url = DataUrl::from_bytes("image/png", &bytes);
        Self { bytes, data_url }
    }

    /// Image bytes as returned by the service.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `data:image/png;base64,...` form.
    pub fn data_url(&self) -> &DataUrl {
        &self.data_url
    }
}

impl From<InlineImage> for CompositeImage {
    fn from(image: InlineImage) -> Self {
        Self::from_png(image.data)
    }
}
