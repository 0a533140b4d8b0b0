#![cfg(feature = "gemini")]

// Tests for the Gemini REST client against a local stub server.
//
// The stub answers one request, so each test builds its own client. The
// real-service tests at the bottom are gated behind the `api` feature.

mod test_utils;

use storygrid_core::{GenerateRequest, ImageConfig, Input, MediaSource, Message, Output};
use storygrid_error::{GeminiErrorKind, StoryGridErrorKind};
use storygrid_interface::{GenerationDriver, extract_inline_image, extract_text};
use storygrid_models::GeminiClient;
use test_utils::{serve_once, text_request};

//
// ─── STUB TESTS (NO API CALLS) ──────────────────────────────────────────────
//

#[tokio::test]
async fn text_request_hits_model_endpoint_with_key_header() -> anyhow::Result<()> {
    let (base_url, captured) = serve_once(
        200,
        r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"C01: hello"}]},"finishReason":"STOP"}]}"#,
    )
    .await?;

    let client = GeminiClient::with_api_key("test-key").with_base_url(base_url);
    let response = client
        .generate(&text_request("Write a script", Some("gemini-3-flash-preview")))
        .await?;

    assert_eq!(extract_text(&response), "C01: hello");

    let request = captured.await?;
    assert_eq!(
        request.request_line,
        "POST /v1beta/models/gemini-3-flash-preview:generateContent HTTP/1.1"
    );
    assert_eq!(request.header("x-goog-api-key"), Some("test-key"));
    assert_eq!(
        request.body["contents"][0]["parts"][0]["text"],
        "Write a script"
    );
    Ok(())
}

#[tokio::test]
async fn default_model_is_used_when_request_names_none() -> anyhow::Result<()> {
    let (base_url, captured) = serve_once(200, r#"{"candidates":[]}"#).await?;

    let client = GeminiClient::with_api_key("k")
        .with_base_url(base_url)
        .with_model("models/custom-model");
    let response = client.generate(&text_request("hi", None)).await?;

    assert!(response.outputs.is_empty());
    assert!(
        captured
            .await?
            .request_line
            .contains("/models/custom-model:generateContent")
    );
    Ok(())
}

#[tokio::test]
async fn image_request_round_trips_inline_data() -> anyhow::Result<()> {
    let (base_url, captured) = serve_once(
        200,
        r#"{"candidates":[{"content":{"parts":[{"text":"Here is the grid"},{"inlineData":{"mimeType":"image/png","data":"iVBORw=="}}]}}]}"#,
    )
    .await?;

    let request = GenerateRequest::builder()
        .messages(vec![Message::user(vec![
            Input::Text("grid prompt".to_string()),
            Input::Image {
                mime: Some("image/jpeg".to_string()),
                source: MediaSource::Base64("/9j/4AAQ".to_string()),
            },
        ])])
        .model("gemini-2.5-flash-image".to_string())
        .image_config(ImageConfig::default())
        .build()?;

    let client = GeminiClient::with_api_key("k").with_base_url(base_url);
    let response = client.generate(&request).await?;

    let image = extract_inline_image(&response)?;
    assert_eq!(image.mime.as_deref(), Some("image/png"));
    assert_eq!(image.data, vec![0x89, 0x50, 0x4E, 0x47]);
    assert!(matches!(&response.outputs[0], Output::Text(t) if t == "Here is the grid"));

    let sent = captured.await?;
    assert_eq!(
        sent.body["contents"][0]["parts"][1]["inlineData"]["mimeType"],
        "image/jpeg"
    );
    assert_eq!(
        sent.body["generationConfig"]["imageConfig"]["aspectRatio"],
        "16:9"
    );
    Ok(())
}

#[tokio::test]
async fn error_status_becomes_http_error() -> anyhow::Result<()> {
    let (base_url, _captured) = serve_once(
        503,
        r#"{"error":{"code":503,"message":"The model is overloaded.","status":"UNAVAILABLE"}}"#,
    )
    .await?;

    let client = GeminiClient::with_api_key("k").with_base_url(base_url);
    let err = client
        .generate(&text_request("hi", None))
        .await
        .expect_err("503 should fail");

    match err.kind() {
        StoryGridErrorKind::Gemini(gemini) => {
            assert_eq!(
                gemini.kind,
                GeminiErrorKind::HttpError {
                    status_code: 503,
                    message: "The model is overloaded.".to_string(),
                }
            );
            assert!(gemini.kind.is_retryable());
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
    assert_eq!(err.user_message(), "HTTP 503 error: The model is overloaded.");
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_invalid_response() -> anyhow::Result<()> {
    let (base_url, _captured) = serve_once(200, "not json").await?;

    let client = GeminiClient::with_api_key("k").with_base_url(base_url);
    let err = client
        .generate(&text_request("hi", None))
        .await
        .expect_err("garbage should fail");

    assert!(matches!(
        err.kind(),
        StoryGridErrorKind::Gemini(g) if matches!(g.kind, GeminiErrorKind::InvalidResponse(_))
    ));
    Ok(())
}

//
// ─── REAL API TESTS ─────────────────────────────────────────────────────────
//

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn live_text_generation() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = GeminiClient::new()?;

    let response = client
        .generate(&text_request("Reply with the single word: ready", None))
        .await?;

    assert!(!extract_text(&response).trim().is_empty());
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn live_image_generation() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = GeminiClient::new()?;

    let request = GenerateRequest::builder()
        .messages(vec![Message::user(vec![Input::Text(
            "A simple black-and-white line drawing of a coffee mug.".to_string(),
        )])])
        .model("gemini-2.5-flash-image".to_string())
        .image_config(ImageConfig::default())
        .build()?;

    let response = client.generate(&request).await?;
    assert!(!extract_inline_image(&response)?.data.is_empty());
    Ok(())
}
