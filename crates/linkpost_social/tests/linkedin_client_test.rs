//! LinkedIn client tests against a mock HTTP server.

mod test_utils;

use linkpost_error::{LinkedInErrorKind, LinkpostError, LinkpostErrorKind};
use linkpost_interface::SocialPublisher;
use serde_json::json;
use test_utils::{TEST_TOKEN, TEST_URN, client_with, configured_client};
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn linkedin_kind(err: &LinkpostError) -> LinkedInErrorKind {
    match err.kind() {
        LinkpostErrorKind::LinkedIn(e) => e.kind.clone(),
        other => panic!("expected LinkedIn error, got {}", other),
    }
}

#[tokio::test]
async fn test_readiness_requires_both_credentials() {
    let server = MockServer::start().await;
    assert!(configured_client(&server).is_ready());
    assert!(!client_with(&server, Some(TEST_TOKEN), None).is_ready());
    assert!(!client_with(&server, None, Some(TEST_URN)).is_ready());
    assert!(!client_with(&server, Some(""), Some(TEST_URN)).is_ready());
}

#[tokio::test]
async fn test_unconfigured_publish_makes_no_network_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    for client in [
        client_with(&server, None, None),
        client_with(&server, Some(TEST_TOKEN), None),
        client_with(&server, None, Some(TEST_URN)),
    ] {
        let err = client.publish("Hello").await.unwrap_err();
        assert_eq!(linkedin_kind(&err), LinkedInErrorKind::NotConfigured);
    }
}

#[tokio::test]
async fn test_publish_sends_ugc_payload() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ugcPosts"))
        .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .and(header("x-restli-protocol-version", "2.0.0"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "author": TEST_URN,
            "lifecycleState": "PUBLISHED",
            "specificContent": {
                "com.linkedin.ugc.ShareContent": {
                    "shareCommentary": { "text": "Ship it" },
                    "shareMediaCategory": "NONE"
                }
            },
            "visibility": { "com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC" }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "urn:li:share:6789",
            "lifecycleState": "PUBLISHED"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let post = configured_client(&server).publish("Ship it").await?;
    assert_eq!(post.id(), "urn:li:share:6789");
    assert_eq!(post.lifecycle_state(), "PUBLISHED");
    Ok(())
}

#[tokio::test]
async fn test_post_id_falls_back_to_restli_header() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ugcPosts"))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("X-RestLi-Id", "urn:li:share:42")
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let post = configured_client(&server).publish("text").await?;
    assert_eq!(post.id(), "urn:li:share:42");
    Ok(())
}

#[tokio::test]
async fn test_rejection_uses_provider_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ugcPosts"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "invalid token",
            "serviceErrorCode": 65600,
            "status": 401
        })))
        .mount(&server)
        .await;

    let err = configured_client(&server).publish("text").await.unwrap_err();
    assert_eq!(
        linkedin_kind(&err),
        LinkedInErrorKind::PublishRejected {
            status_code: 401,
            message: "invalid token".to_string(),
        }
    );
    assert!(err.message().contains("invalid token"));
}

#[tokio::test]
async fn test_rejection_without_message_uses_reason_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ugcPosts"))
        .respond_with(ResponseTemplate::new(403).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let err = configured_client(&server).publish("text").await.unwrap_err();
    assert_eq!(err.message(), "LinkedIn API error: 403 - Forbidden");
}

#[tokio::test]
async fn test_user_profile_returns_raw_json() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/userinfo"))
        .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sub": "abc123",
            "name": "Ada Lovelace"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Profile lookups only need the token.
    let profile = client_with(&server, Some(TEST_TOKEN), None)
        .user_profile()
        .await?;
    assert_eq!(profile["sub"], "abc123");
    Ok(())
}

#[tokio::test]
async fn test_user_profile_requires_token() {
    let server = MockServer::start().await;
    let err = client_with(&server, None, Some(TEST_URN))
        .user_profile()
        .await
        .unwrap_err();
    assert_eq!(linkedin_kind(&err), LinkedInErrorKind::MissingAccessToken);
}

#[tokio::test]
async fn test_user_profile_rejection_is_not_a_publish_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/userinfo"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "expired token",
            "status": 401
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_with(&server, Some(TEST_TOKEN), None)
        .user_profile()
        .await
        .unwrap_err();
    assert_eq!(
        linkedin_kind(&err),
        LinkedInErrorKind::ProfileRejected {
            status_code: 401,
            message: "expired token".to_string(),
        }
    );
    assert_eq!(err.message(), "LinkedIn profile lookup failed: 401 - expired token");
}
