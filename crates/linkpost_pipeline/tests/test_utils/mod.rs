//! Fake providers for pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use linkpost_core::{GenerateRequest, GenerateResponse, PublishedPost};
use linkpost_error::{GeminiError, GeminiErrorKind, LinkedInError, LinkedInErrorKind, LinkpostResult};
use linkpost_interface::{ContentGenerator, SocialPublisher};
use std::sync::{Arc, Mutex};

/// Generator that echoes a fixed reply, or fails with a fixed error.
#[derive(Clone)]
pub struct FakeGenerator {
    reply: Result<String, GeminiErrorKind>,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Self {
        Self::with_reply(Ok(text.to_string()))
    }

    pub fn failing(kind: GeminiErrorKind) -> Self {
        Self::with_reply(Err(kind))
    }

    fn with_reply(reply: Result<String, GeminiErrorKind>) -> Self {
        Self {
            reply,
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ContentGenerator for FakeGenerator {
    async fn generate(&self, req: &GenerateRequest) -> LinkpostResult<GenerateResponse> {
        *self.call_count.lock().unwrap() += 1;
        self.requests.lock().unwrap().push(req.clone());
        match &self.reply {
            Ok(text) => Ok(GenerateResponse::new(text.clone())),
            Err(kind) => Err(GeminiError::new(kind.clone()).into()),
        }
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
    result: Result<PublishedPost, LinkedInErrorKind>,
    call_count: Arc<Mutex<usize>>,
    published: Arc<Mutex<Vec<String>>>,
}

impl FakePublisher {
    pub fn ready() -> Self {
        Self::with(true, Ok(PublishedPost::new("urn:li:share:1", "PUBLISHED")))
    }

    pub fn unconfigured() -> Self {
        Self::with(false, Err(LinkedInErrorKind::NotConfigured))
    }

    pub fn rejecting(status_code: u16, message: &str) -> Self {
        Self::with(
            true,
            Err(LinkedInErrorKind::PublishRejected {
                status_code,
                message: message.to_string(),
            }),
        )
    }

    fn with(ready: bool, result: Result<PublishedPost, LinkedInErrorKind>) -> Self {
        Self {
            ready,
            result,
            call_count: Arc::new(Mutex::new(0)),
            published: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn published(&self) -> Vec<String> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl SocialPublisher for FakePublisher {
    fn is_ready(&self) -> bool {
        self.ready
    }

    async fn publish(&self, text: &str) -> LinkpostResult<PublishedPost> {
        *self.call_count.lock().unwrap() += 1;
        if !self.ready {
            return Err(LinkedInError::new(LinkedInErrorKind::NotConfigured).into());
        }
        self.published.lock().unwrap().push(text.to_string());
        match &self.result {
            Ok(post) => Ok(post.clone()),
            Err(kind) => Err(LinkedInError::new(kind.clone()).into()),
        }
    }

    fn platform_name(&self) -> &'static str {
        "fake"
    }
}
