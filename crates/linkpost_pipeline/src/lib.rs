//! Generate-then-publish orchestration.
//!
//! [`PostPipeline`] composes the prompt synthesizer, a [`ContentGenerator`]
//! and a [`SocialPublisher`]:
//!
//! 1. Resolve the prompt (custom topic or random)
//! 2. Generate content (failure stops here, nothing is published)
//! 3. Stop early on dry runs or when the publisher lacks credentials
//! 4. Publish, keeping the generated content even if publishing fails
//!
//! Each run makes at most one generation attempt and at most one publish attempt.
//!
//! [`ContentGenerator`]: linkpost_interface::ContentGenerator
//! [`SocialPublisher`]: linkpost_interface::SocialPublisher

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod options;
mod outcome;
mod pipeline;
mod report;

pub use options::{PostOptions, PostOptionsBuilder};
pub use outcome::{GeneratedPost, PipelineError, PostOutcome};
pub use pipeline::PostPipeline;
pub use report::{RunReport, RunStatus};
