//! Narrow accessors over response part lists.

use storygrid_core::{GenerateResponse, Output};
use storygrid_error::{GeminiError, GeminiErrorKind, StoryGridResult};

/// An image part pulled out of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    /// MIME type reported by the service, if any
    pub mime: Option<String>,
    /// Decoded image bytes
    pub data: Vec<u8>,
}

/// All text parts joined together, or an empty string when there are none.
///
/// # Examples
///
/// ```
/// use storygrid_core::{GenerateResponse, Output};
/// use storygrid_interface::extract_text;
///
/// let response = GenerateResponse {
///     outputs: vec![Output::Text("C01: a\n".to_string()), Output::Text("C02: b".to_string())],
/// };
/// assert_eq!(extract_text(&response), "C01: a\nC02: b");
/// assert_eq!(extract_text(&GenerateResponse::default()), "");
/// ```
pub fn extract_text(response: &GenerateResponse) -> String {
    response
        .outputs
        .iter()
        .filter_map(|output| match output {
            Output::Text(text) => Some(text.as_str()),
            Output::Image { .. } => None,
        })
        .collect()
}

/// The first inline image part.
///
/// # Errors
///
/// Returns [`GeminiErrorKind::NoImageData`] when the response carries no image.
///
/// # Examples
///
/// ```
/// use storygrid_core::{GenerateResponse, Output};
/// use storygrid_interface::extract_inline_image;
///
/// let response = GenerateResponse {
///     outputs: vec![
///         Output::Text("Here is your storyboard".to_string()),
///         Output::Image { mime: Some("image/png".to_string()), data: vec![1, 2, 3] },
///     ],
/// };
/// assert_eq!(extract_inline_image(&response).unwrap().data, vec![1, 2, 3]);
///
/// let text_only = GenerateResponse { outputs: vec![Output::Text("sorry".to_string())] };
/// assert!(extract_inline_image(&text_only).is_err());
/// ```
pub fn extract_inline_image(response: &GenerateResponse) -> StoryGridResult<InlineImage> {
    response
        .outputs
        .iter()
        .find_map(|output| match output {
            Output::Image { mime, data } => Some(InlineImage {
                mime: mime.clone(),
                data: data.clone(),
            }),
            Output::Text(_) => None,
        })
        .ok_or_else(|| {
            tracing::warn!(parts = response.outputs.len(), "Response carried no inline image");
            GeminiError::new(GeminiErrorKind::NoImageData).into()
        })
}
