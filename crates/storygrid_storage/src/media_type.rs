//! Image formats recognised by file extension.

use std::path::Path;

/// Image formats a reference image may arrive in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum ImageFormat {
    /// Portable Network Graphics
    #[display("png")]
    Png,
    /// JPEG
    #[display("jpeg")]
    Jpeg,
    /// WebP
    #[display("webp")]
    Webp,
    /// GIF
    #[display("gif")]
    Gif,
    /// HEIC
    #[display("heic")]
    Heic,
    /// HEIF
    #[display("heif")]
    Heif,
}

impl ImageFormat {
    /// MIME type for the format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Webp => "image/webp",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Heic => "image/heic",
            ImageFormat::Heif => "image/heif",
        }
    }

    /// Format for a file extension, case-insensitive.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" | "jpe" => Some(ImageFormat::Jpeg),
            "webp" => Some(ImageFormat::Webp),
            "gif" => Some(ImageFormat::Gif),
            "heic" => Some(ImageFormat::Heic),
            "heif" => Some(ImageFormat::Heif),
            _ => None,
        }
    }

    /// Format for a path, judged by extension only.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// MIME type for a path.
///
/// Unknown or missing extensions fall back to `image/png`; the file contents
/// are never inspected.
pub fn mime_for_path(path: &Path) -> &'static str {
    ImageFormat::from_path(path)
        .unwrap_or(ImageFormat::Png)
        .mime_type()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_format_round_trips_through_its_name() {
        for format in ImageFormat::iter() {
            assert_eq!(ImageFormat::from_extension(&format.to_string()), Some(format));
            assert!(format.mime_type().starts_with("image/"));
        }
    }

    #[test]
    fn extension_lookup_is_case_insensitive() {
        assert_eq!(mime_for_path(Path::new("ref.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("dir.v2/ref.WebP")), "image/webp");
    }

    #[test]
    fn unknown_extension_defaults_to_png() {
        assert_eq!(mime_for_path(Path::new("ref.bmp")), "image/png");
        assert_eq!(mime_for_path(Path::new("reference")), "image/png");
    }
}
