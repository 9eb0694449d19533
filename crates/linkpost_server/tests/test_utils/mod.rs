//! Fake providers and request helpers for router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use linkpost_core::{
    AppEnvironment, GenerateRequest, GenerateResponse, PublishedPost, ServerSettings,
};
use linkpost_error::{GeminiError, GeminiErrorKind, LinkedInError, LinkedInErrorKind, LinkpostResult};
use linkpost_interface::{ContentGenerator, SocialPublisher};
use linkpost_pipeline::PostPipeline;
use linkpost_server::{AppState, create_router};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Generator that prefixes the prompt's first line, or fails.
#[derive(Clone)]
pub struct FakeGenerator {
    fail_with: Option<GeminiErrorKind>,
    call_count: Arc<Mutex<usize>>,
    max_tokens: Arc<Mutex<Option<u32>>>,
}

impl FakeGenerator {
    pub fn working() -> Self {
        Self {
            fail_with: None,
            call_count: Arc::new(Mutex::new(0)),
            max_tokens: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing(kind: GeminiErrorKind) -> Self {
        Self {
            fail_with: Some(kind),
            call_count: Arc::new(Mutex::new(0)),
            max_tokens: Arc::new(Mutex::new(None)),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Token budget of the most recent request.
    pub fn last_max_tokens(&self) -> Option<u32> {
        *self.max_tokens.lock().unwrap()
    }
}

#[async_trait]
impl ContentGenerator for FakeGenerator {
    async fn generate(&self, req: &GenerateRequest) -> LinkpostResult<GenerateResponse> {
        *self.call_count.lock().unwrap() += 1;
        *self.max_tokens.lock().unwrap() = *req.max_tokens();
        if let Some(kind) = &self.fail_with {
            return Err(GeminiError::new(kind.clone()).into());
        }
        let first_line = req.messages()[0].text.lines().next().unwrap_or_default();
        Ok(GenerateResponse::new(format!("Generated: {} #tech", first_line)))
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

/// Publisher with configurable readiness and result.
#[derive(Clone)]
pub struct FakePublisher {
    ready: bool,
    reject: Option<(u16, String)>,
    call_count: Arc<Mutex<usize>>,
}

impl FakePublisher {
    pub fn ready() -> Self {
        Self {
            ready: true,
            reject: None,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            ready: false,
            ..Self::ready()
        }
    }

    pub fn rejecting(status_code: u16, message: &str) -> Self {
        Self {
            reject: Some((status_code, message.to_string())),
            ..Self::ready()
        }
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl SocialPublisher for FakePublisher {
    fn is_ready(&self) -> bool {
        self.ready
    }

    async fn publish(&self, _text: &str) -> LinkpostResult<PublishedPost> {
        *self.call_count.lock().unwrap() += 1;
        if !self.ready {
            return Err(LinkedInError::new(LinkedInErrorKind::NotConfigured).into());
        }
        match &self.reject {
            Some((status_code, message)) => Err(LinkedInError::new(
                LinkedInErrorKind::PublishRejected {
                    status_code: *status_code,
                    message: message.clone(),
                },
            )
            .into()),
            None => Ok(PublishedPost::new("urn:li:share:7001", "PUBLISHED")),
        }
    }

    fn platform_name(&self) -> &'static str {
        "fake"
    }
}

/// Router over the given fakes, in the given environment.
pub fn app(
    generator: &FakeGenerator,
    publisher: &FakePublisher,
    environment: AppEnvironment,
) -> Router {
    let settings = ServerSettings::builder()
        .environment(environment)
        .api_version("v2")
        .build()
        .expect("valid settings");
    app_with_settings(generator, publisher, settings)
}

/// Router over the given fakes with explicit server settings.
pub fn app_with_settings(
    generator: &FakeGenerator,
    publisher: &FakePublisher,
    settings: ServerSettings,
) -> Router {
    let pipeline = PostPipeline::new(Arc::new(generator.clone()), Arc::new(publisher.clone()));
    create_router(AppState::new(pipeline, settings, true))
}

/// POST a JSON body.
pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request");
    send(app, request).await
}

/// POST a form-encoded body.
pub async fn post_form(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("valid request");
    send(app, request).await
}

/// GET a route.
pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request");
    send(app, request).await
}

/// Send a request and decode the JSON response.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("infallible router");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
