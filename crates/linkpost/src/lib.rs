//! Linkpost: generate LinkedIn posts with Gemini and publish them.
//!
//! A post is produced in three steps: a prompt is synthesized from a topic
//! (given, or drawn from a catalog), Gemini turns the prompt into post text,
//! and the text is published to the member's LinkedIn feed. The same
//! [`PostPipeline`] backs the HTTP API ([`linkpost_server`]) and the
//! scheduled `linkpost daily-post` command.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use linkpost::{LinkpostConfig, PostOptions, build_pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = LinkpostConfig::load()?;
//!     let pipeline = build_pipeline(&config)?;
//!
//!     let options = PostOptions::builder()
//!         .topic(Some("Rust".to_string()))
//!         .dry_run(true)
//!         .build()?;
//!     let generated = pipeline.generate(&options).await?;
//!     println!("{}", generated.content());
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - Bridge tracing spans to OpenTelemetry (stdout exporter)
//!
//! # Architecture
//!
//! - `linkpost_error` - Error types
//! - `linkpost_core` - Value types and configuration
//! - `linkpost_interface` - Provider traits
//! - `linkpost_prompt` - Prompt synthesis
//! - `linkpost_models` - Gemini client
//! - `linkpost_social` - LinkedIn client
//! - `linkpost_pipeline` - Generate-then-publish orchestration
//! - `linkpost_server` - HTTP API
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bootstrap;
pub mod observability;

pub use bootstrap::{app_state, build_pipeline, daily_post, daily_post_with_config};

// Re-export error types
pub use linkpost_error::{
    ConfigError, ConfigErrorKind, GeminiError, GeminiErrorKind, LinkedInError, LinkedInErrorKind,
    LinkpostError, LinkpostErrorKind, LinkpostResult, ServerError,
};

// Re-export core types
pub use linkpost_core::{
    AppEnvironment, FinishReason, GeminiSettings, GenerateRequest, GenerateResponse,
    LinkedInSettings, LinkpostConfig, Message, Prompt, PublishedPost, Role, ServerSettings,
    TokenUsage,
};

// Re-export provider traits
pub use linkpost_interface::{
    ContentGenerator, GenerationStream, SocialPublisher, StreamChunk, Streaming,
};

// Re-export prompt synthesis
pub use linkpost_prompt::{
    POST_STYLES, POST_TONES, TOPICS, generate_custom_prompt, generate_prompt,
};

// Re-export providers
pub use linkpost_models::GeminiClient;
pub use linkpost_social::LinkedInClient;

// Re-export orchestration
pub use linkpost_pipeline::{
    GeneratedPost, PipelineError, PostOptions, PostOutcome, PostPipeline, RunReport, RunStatus,
};

// Re-export the HTTP surface
pub use linkpost_server::{AppState, create_router, serve};
