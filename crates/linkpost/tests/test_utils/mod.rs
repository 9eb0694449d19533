//! Configuration pointed at a single mock server for both providers.

#![allow(dead_code)]

use linkpost_core::{GeminiSettings, LinkedInSettings, LinkpostConfig};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_MODEL: &str = "gemini-3-flash-preview";
pub const TEST_KEY: &str = "test-gemini-key";
pub const TEST_TOKEN: &str = "test-linkedin-token";
pub const TEST_URN: &str = "urn:li:person:abc123";

pub fn generate_path() -> String {
    format!("/v1beta/models/{}:generateContent", TEST_MODEL)
}

/// Config with every credential present unless overridden.
pub fn config_for(
    server: &MockServer,
    api_key: Option<&str>,
    token: Option<&str>,
    urn: Option<&str>,
) -> LinkpostConfig {
    let gemini = GeminiSettings::builder()
        .api_key(api_key.map(str::to_string))
        .model(TEST_MODEL)
        .base_url(server.uri())
        .build()
        .expect("valid gemini settings");
    let linkedin = LinkedInSettings::builder()
        .access_token(token.map(str::to_string))
        .person_urn(urn.map(str::to_string))
        .base_url(server.uri())
        .build()
        .expect("valid linkedin settings");
    LinkpostConfig::builder()
        .gemini(gemini)
        .linkedin(linkedin)
        .build()
        .expect("valid config")
}

pub fn configured(server: &MockServer) -> LinkpostConfig {
    config_for(server, Some(TEST_KEY), Some(TEST_TOKEN), Some(TEST_URN))
}

pub fn candidate_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}
