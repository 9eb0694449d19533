//! Core data types for the linkpost content pipeline.
//!
//! This crate provides the value types shared by every linkpost crate, plus the
//! process-wide [`LinkpostConfig`] that is loaded once at startup and threaded into
//! client constructors.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod message;
mod post;
mod prompt;
mod request;
mod role;

pub use config::{
    AppEnvironment, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_LINKEDIN_BASE_URL,
    DEFAULT_PORT, GeminiSettings, GeminiSettingsBuilder, LinkedInSettings,
    LinkedInSettingsBuilder, LinkpostConfig, LinkpostConfigBuilder, ServerSettings,
    ServerSettingsBuilder,
};
pub use message::Message;
pub use post::PublishedPost;
pub use prompt::Prompt;
pub use request::{
    FinishReason, GenerateRequest, GenerateRequestBuilder, GenerateResponse, TokenUsage,
};
pub use role::Role;
