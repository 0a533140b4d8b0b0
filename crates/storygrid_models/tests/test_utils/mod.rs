//! Test utilities for the model clients.

pub mod http_stub;

#[allow(unused_imports)]
pub use http_stub::{CapturedRequest, serve_once};

use storygrid_core::{GenerateRequest, Input, Message};

/// A single-turn text request.
#[allow(dead_code)]
pub fn text_request(prompt: &str, model: Option<&str>) -> GenerateRequest {
    GenerateRequest::builder()
        .messages(vec![Message::user(vec![Input::Text(prompt.to_string())])])
        .model(model.map(str::to_string))
        .build()
        .expect("Failed to build test request")
}
