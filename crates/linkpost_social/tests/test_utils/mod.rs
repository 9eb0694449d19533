//! Shared helpers for LinkedIn client tests.

#![allow(dead_code)]

use linkpost_core::LinkedInSettings;
use linkpost_social::LinkedInClient;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-access-token";
pub const TEST_URN: &str = "urn:li:person:abc123";

/// Fully configured client pointed at the mock server.
pub fn configured_client(server: &MockServer) -> LinkedInClient {
    client_with(server, Some(TEST_TOKEN), Some(TEST_URN))
}

/// Client with the given credentials pointed at the mock server.
pub fn client_with(
    server: &MockServer,
    token: Option<&str>,
    urn: Option<&str>,
) -> LinkedInClient {
    let settings = LinkedInSettings::builder()
        .access_token(token.map(str::to_string))
        .person_urn(urn.map(str::to_string))
        .base_url(server.uri())
        .build()
        .expect("valid settings");
    LinkedInClient::new(&settings).expect("client builds")
}
