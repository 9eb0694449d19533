//! Trait definitions for content generators and publishers.

use crate::StreamChunk;
use async_trait::async_trait;
use futures_util::stream::Stream;
use linkpost_core::{GenerateRequest, GenerateResponse, PublishedPost};
use linkpost_error::LinkpostResult;
use std::pin::Pin;

/// Boxed stream of generation chunks.
pub type GenerationStream = Pin<Box<dyn Stream<Item = LinkpostResult<StreamChunk>> + Send>>;

/// Core trait that every text generation backend implements.
///
/// A successful response always carries non-empty text; an empty provider
/// answer is an error.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate text for a request.
    async fn generate(&self, req: &GenerateRequest) -> LinkpostResult<GenerateResponse>;

    /// Provider name (e.g. "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier.
    fn model_name(&self) -> &str;
}

/// Generators that can stream partial output.
#[async_trait]
pub trait Streaming: ContentGenerator {
    /// Start a fresh stream for the request.
    ///
    /// The stream yields non-empty chunks until the provider closes it, or
    /// yields a single error and ends.
    async fn generate_stream(&self, req: &GenerateRequest) -> LinkpostResult<GenerationStream>;
}

/// A social network that can publish text posts.
#[async_trait]
pub trait SocialPublisher: Send + Sync {
    /// Whether credentials are present. Never fails and never touches the network.
    fn is_ready(&self) -> bool;

    /// Publish `text` as a public post.
    ///
    /// # Errors
    ///
    /// Fails before any network call when credentials are missing, and when
    /// the platform rejects the post.
    async fn publish(&self, text: &str) -> LinkpostResult<PublishedPost>;

    /// Platform name (e.g. "linkedin").
    fn platform_name(&self) -> &'static str;
}
