//! The generate-then-publish pipeline.

use crate::{GeneratedPost, PipelineError, PostOptions, PostOutcome, RunReport};
use linkpost_core::{GenerateRequest, Prompt};
use linkpost_interface::{ContentGenerator, SocialPublisher};
use linkpost_error::{LinkedInError, LinkedInErrorKind};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Composes prompt synthesis, generation and publishing.
///
/// Cheap to clone; both providers are shared behind `Arc`.
#[derive(Clone)]
pub struct PostPipeline {
    generator: Arc<dyn ContentGenerator>,
    publisher: Arc<dyn SocialPublisher>,
}

impl std::fmt::Debug for PostPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostPipeline")
            .field("provider", &self.generator.provider_name())
            .field("model", &self.generator.model_name())
            .field("platform", &self.publisher.platform_name())
            .finish()
    }
}

impl PostPipeline {
    /// Create a pipeline over the given providers.
    pub fn new(generator: Arc<dyn ContentGenerator>, publisher: Arc<dyn SocialPublisher>) -> Self {
        Self {
            generator,
            publisher,
        }
    }

    /// The content generator.
    pub fn generator(&self) -> &Arc<dyn ContentGenerator> {
        &self.generator
    }

    /// The publisher.
    pub fn publisher(&self) -> &Arc<dyn SocialPublisher> {
        &self.publisher
    }

    /// Whether the publisher has credentials.
    pub fn publisher_ready(&self) -> bool {
        self.publisher.is_ready()
    }

    /// Prompt for the options' topic, or a random one.
    pub fn resolve_prompt(options: &PostOptions) -> Prompt {
        match options.requested_topic() {
            Some(topic) => linkpost_prompt::generate_custom_prompt(topic),
            None => linkpost_prompt::generate_prompt(),
        }
    }

    /// Resolve a prompt and generate content for it. Never publishes.
    #[instrument(skip(self, options), fields(topic = ?options.requested_topic()))]
    pub async fn generate(&self, options: &PostOptions) -> Result<GeneratedPost, PipelineError> {
        let prompt = Self::resolve_prompt(options);
        info!(topic = %prompt.topic(), "Generating content");

        let request = GenerateRequest::from_prompt(prompt.as_str(), options.token_budget());
        let response = self
            .generator
            .generate(&request)
            .await
            .map_err(|e| {
                warn!(error = %e, "Content generation failed");
                PipelineError::Generation(e)
            })?;

        info!(content_len = response.text().len(), "Content generated");
        Ok(GeneratedPost::new(response.into_text(), prompt))
    }

    /// Run the full pipeline once.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Generation`] when generation fails (no publish is
    /// attempted), [`PipelineError::Publish`] when the publisher rejects the
    /// post (the generated content is kept).
    #[instrument(skip(self, options), fields(dry_run = *options.dry_run()))]
    pub async fn run(&self, options: &PostOptions) -> Result<PostOutcome, PipelineError> {
        let generated = self.generate(options).await?;

        if *options.dry_run() {
            info!("Dry run, skipping publish");
            return Ok(PostOutcome::DryRun(generated));
        }

        if !self.publisher.is_ready() {
            warn!(platform = self.publisher.platform_name(), "Publisher not configured, skipping publish");
            return Ok(PostOutcome::PublishSkipped(generated));
        }

        match self.publisher.publish(generated.content()).await {
            Ok(post) => {
                info!(post_id = %post.id(), "Published");
                Ok(PostOutcome::Published { generated, post })
            }
            Err(source) => {
                warn!(error = %source, "Publish failed");
                Err(PipelineError::Publish { source, generated })
            }
        }
    }

    /// Scheduled entry point: random topic, publish required.
    ///
    /// Missing publisher credentials abort before any generation.
    #[instrument(skip(self))]
    pub async fn run_scheduled(&self) -> RunReport {
        info!("Starting scheduled post run");

        if !self.publisher.is_ready() {
            let error = LinkedInError::new(LinkedInErrorKind::NotConfigured);
            warn!(error = %error.kind, "Scheduled run aborted");
            return RunReport::failed(error.kind.to_string());
        }

        match self.run(&PostOptions::default()).await {
            Ok(PostOutcome::Published { generated, post }) => {
                RunReport::succeeded(generated.content().chars().count(), post.id().clone())
            }
            Ok(other) => {
                // Readiness was checked above; only a race with reconfiguration lands here.
                RunReport::failed(format!(
                    "Post was not published ({} characters generated)",
                    other.generated().content().chars().count()
                ))
            }
            Err(e) => RunReport::failed(e.error().message()),
        }
    }
}
