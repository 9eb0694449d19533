//! Shared helpers for Gemini client tests.

#![allow(dead_code)]

use linkpost_core::GeminiSettings;
use linkpost_models::GeminiClient;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_MODEL: &str = "gemini-3-flash-preview";
pub const TEST_KEY: &str = "test-gemini-key";

/// Path of the non-streaming endpoint for the test model.
pub fn generate_path() -> String {
    format!("/v1beta/models/{}:generateContent", TEST_MODEL)
}

/// Path of the streaming endpoint for the test model.
pub fn stream_path() -> String {
    format!("/v1beta/models/{}:streamGenerateContent", TEST_MODEL)
}

/// Client pointed at the mock server.
pub fn client_for(server: &MockServer) -> GeminiClient {
    let settings = GeminiSettings::builder()
        .api_key(Some(TEST_KEY.to_string()))
        .model(TEST_MODEL)
        .base_url(server.uri())
        .build()
        .expect("valid settings");
    GeminiClient::new(&settings).expect("client builds")
}

/// A successful `generateContent` body with the given parts.
pub fn candidate_body(parts: &[&str]) -> Value {
    let parts: Vec<Value> = parts.iter().map(|text| json!({ "text": text })).collect();
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": parts },
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 12,
            "candidatesTokenCount": 34,
            "totalTokenCount": 46
        }
    })
}
