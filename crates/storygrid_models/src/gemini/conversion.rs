//! Conversions between StoryGrid request/response values and Gemini wire types.

use super::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfigDto,
    InlineData, InlineDataPart, Part, TextPart,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use storygrid_core::{GenerateRequest, GenerateResponse, Input, Message, Output, Role};
use storygrid_error::{GeminiError, GeminiErrorKind};

use super::GeminiResult;

const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Build the wire request.
///
/// Every message becomes a `user` turn. Asking for an image adds the image
/// modality and aspect ratio.
pub fn to_gemini_request(req: &GenerateRequest) -> GenerateContentRequest {
    let contents = req
        .messages()
        .iter()
        .map(|message| Content {
            role: Some(wire_role(message.role).to_string()),
            parts: message_parts(message),
        })
        .collect();

    let generation_config = if req.temperature().is_some()
        || req.max_tokens().is_some()
        || req.image_config().is_some()
    {
        Some(GenerationConfig {
            temperature: *req.temperature(),
            max_output_tokens: *req.max_tokens(),
            response_modalities: req
                .image_config()
                .as_ref()
                .map(|_| vec!["TEXT".to_string(), "IMAGE".to_string()]),
            image_config: req.image_config().as_ref().map(|config| ImageConfigDto {
                aspect_ratio: config.aspect_ratio.clone(),
            }),
        })
    } else {
        None
    };

    GenerateContentRequest {
        contents,
        generation_config,
    }
}

fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
    }
}

fn message_parts(message: &Message) -> Vec<Part> {
    message
        .content
        .iter()
        .map(|input| match input {
            Input::Text(text) => Part::Text(TextPart { text: text.clone() }),
            Input::Image { mime, source } => Part::InlineData(InlineDataPart {
                inline_data: InlineData {
                    mime_type: mime.clone().unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string()),
                    data: source.to_base64(),
                },
            }),
        })
        .collect()
}

/// Read the first candidate's parts.
///
/// A response without candidates converts to an empty output list; callers
/// decide whether that is an empty text or a missing image.
///
/// # Errors
///
/// Returns [`GeminiErrorKind::Base64Decode`] if an inline payload is corrupt.
pub fn from_gemini_response(response: &GenerateContentResponse) -> GeminiResult<GenerateResponse> {
    let parts = response
        .candidates()
        .first()
        .and_then(|candidate| candidate.content().as_ref())
        .map(|content| content.parts.as_slice())
        .unwrap_or_default();

    let mut outputs = Vec::with_capacity(parts.len());
    for part in parts {
        match part {
            Part::Text(TextPart { text }) => outputs.push(Output::Text(text.clone())),
            Part::InlineData(InlineDataPart { inline_data }) => {
                let data = STANDARD.decode(inline_data.data.as_bytes()).map_err(|e| {
                    GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string()))
                })?;
                outputs.push(Output::Image {
                    mime: Some(inline_data.mime_type.clone()),
                    data,
                });
            }
            Part::Other(_) => {}
        }
    }

    Ok(GenerateResponse { outputs })
}
