//! Pipeline results.

use derive_getters::Getters;
use linkpost_core::{Prompt, PublishedPost};
use linkpost_error::LinkpostError;
use serde::Serialize;

/// Generated content together with the prompt that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GeneratedPost {
    /// Generated post text (never empty)
    content: String,
    /// Prompt sent to the generator
    prompt: Prompt,
}

impl GeneratedPost {
    /// Pair content with its prompt.
    pub fn new(content: impl Into<String>, prompt: Prompt) -> Self {
        Self {
            content: content.into(),
            prompt,
        }
    }
}

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    /// Dry run: generated only, the publisher was never called.
    DryRun(GeneratedPost),
    /// Publish requested but the publisher has no credentials.
    PublishSkipped(GeneratedPost),
    /// Generated and published.
    Published {
        /// Generated content and prompt
        generated: GeneratedPost,
        /// Publisher's record of the post
        post: PublishedPost,
    },
}

impl PostOutcome {
    /// Generated content and prompt, present in every outcome.
    pub fn generated(&self) -> &GeneratedPost {
        match self {
            PostOutcome::DryRun(generated) | PostOutcome::PublishSkipped(generated) => generated,
            PostOutcome::Published { generated, .. } => generated,
        }
    }

    /// Published post, when one was created.
    pub fn post(&self) -> Option<&PublishedPost> {
        match self {
            PostOutcome::Published { post, .. } => Some(post),
            _ => None,
        }
    }
}

/// A run that failed.
#[derive(Debug, derive_more::Display)]
pub enum PipelineError {
    /// Content generation failed; nothing was published.
    #[display("{}", _0)]
    Generation(LinkpostError),
    /// Publishing failed after content was generated.
    #[display("{}", source)]
    Publish {
        /// Publisher error
        source: LinkpostError,
        /// Content that was generated before the failure
        generated: GeneratedPost,
    },
}

impl PipelineError {
    /// Underlying error.
    pub fn error(&self) -> &LinkpostError {
        match self {
            PipelineError::Generation(source) | PipelineError::Publish { source, .. } => source,
        }
    }

    /// Generated content, if generation got that far.
    pub fn generated(&self) -> Option<&GeneratedPost> {
        match self {
            PipelineError::Generation(_) => None,
            PipelineError::Publish { generated, .. } => Some(generated),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.error())
    }
}
