//! Per-run options.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Options for a single pipeline run.
///
/// # Examples
///
/// ```
/// use linkpost_pipeline::PostOptions;
///
/// let options = PostOptions::builder()
///     .topic(Some("Rust".to_string()))
///     .dry_run(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(options.requested_topic(), Some("Rust"));
/// assert_eq!(options.token_budget(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into), default)]
pub struct PostOptions {
    /// Topic override; random when absent
    topic: Option<String>,
    /// Output token budget; provider default when absent
    max_tokens: Option<u32>,
    /// Generate without publishing
    dry_run: bool,
}

impl PostOptions {
    /// Creates a new options builder.
    pub fn builder() -> PostOptionsBuilder {
        PostOptionsBuilder::default()
    }

    /// Topic to use, treating an empty string as "not supplied".
    pub fn requested_topic(&self) -> Option<&str> {
        self.topic.as_deref().filter(|topic| !topic.is_empty())
    }

    /// Token budget to send, treating zero as "not supplied".
    pub fn token_budget(&self) -> Option<u32> {
        self.max_tokens.filter(|tokens| *tokens > 0)
    }
}
