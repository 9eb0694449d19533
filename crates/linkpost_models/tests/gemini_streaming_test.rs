//! Gemini streaming tests against a mock SSE endpoint.

mod test_utils;

use futures_util::StreamExt;
use linkpost_core::{FinishReason, GenerateRequest};
use linkpost_error::{GeminiErrorKind, LinkpostErrorKind};
use linkpost_interface::Streaming;
use serde_json::json;
use test_utils::{client_for, stream_path};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sse_event(text: &str, finish: Option<&str>) -> String {
    let mut candidate = json!({ "content": { "role": "model", "parts": [{ "text": text }] } });
    if let Some(reason) = finish {
        candidate["finishReason"] = json!(reason);
    }
    format!("data: {}\r\n\r\n", json!({ "candidates": [candidate] }))
}

#[tokio::test]
async fn test_stream_yields_chunks_in_order() -> anyhow::Result<()> {
    let body = [
        sse_event("Rust ", None),
        sse_event("", None),
        sse_event("is fast.", Some("STOP")),
    ]
    .concat();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(stream_path()))
        .and(query_param("alt", "sse"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let stream = client
        .generate_stream(&GenerateRequest::from_prompt("prompt", None))
        .await?;
    let chunks: Vec<_> = stream.collect().await;

    assert_eq!(chunks.len(), 2);
    let first = chunks[0].as_ref().map_err(|e| anyhow::anyhow!("{}", e))?;
    let last = chunks[1].as_ref().map_err(|e| anyhow::anyhow!("{}", e))?;
    assert_eq!(first.text, "Rust ");
    assert!(!first.is_final);
    assert_eq!(last.text, "is fast.");
    assert!(last.is_final);
    assert_eq!(last.finish_reason, Some(FinishReason::Stop));
    Ok(())
}

#[tokio::test]
async fn test_stream_stops_after_malformed_event() -> anyhow::Result<()> {
    let body = format!(
        "{}data: {{not json\n\n{}",
        sse_event("first", None),
        sse_event("never seen", None)
    );

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(stream_path()))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .mount(&server)
        .await;

    let chunks: Vec<_> = client_for(&server)
        .generate_stream(&GenerateRequest::from_prompt("prompt", None))
        .await?
        .collect()
        .await;

    assert_eq!(chunks.len(), 2);
    assert!(chunks[0].is_ok());
    let err = chunks[1].as_ref().unwrap_err();
    assert!(matches!(
        err.kind(),
        LinkpostErrorKind::Gemini(e) if matches!(e.kind, GeminiErrorKind::ResponseParse(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_stream_open_fails_on_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(stream_path()))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "code": 429, "message": "Resource exhausted" }
        })))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .generate_stream(&GenerateRequest::from_prompt("prompt", None))
        .await;

    let Err(err) = result else {
        panic!("expected stream to fail to open");
    };
    assert_eq!(err.message(), "HTTP 429 error: Resource exhausted");
}
