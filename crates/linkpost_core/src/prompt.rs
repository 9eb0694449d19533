//! Rendered generation prompts.

use derive_getters::Getters;
use serde::{Serialize, Serializer};

/// A fully rendered prompt plus the catalog choices that produced it.
///
/// Serializes as the rendered text only, which is what API consumers see.
///
/// # Examples
///
/// ```
/// use linkpost_core::Prompt;
///
/// let prompt = Prompt::new("Rust", "Discuss the future of", "Write in a teaching style", "About Rust");
/// assert_eq!(prompt.topic(), "Rust");
/// assert_eq!(prompt.to_string(), "About Rust");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_more::Display)]
#[display("{}", text)]
pub struct Prompt {
    /// Topic the post is about
    topic: String,
    /// Style directive applied to the topic
    style: String,
    /// Tone directive
    tone: String,
    /// Rendered prompt text sent to the provider
    text: String,
}

impl Prompt {
    /// Assemble a prompt from its parts.
    pub fn new(
        topic: impl Into<String>,
        style: impl Into<String>,
        tone: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            style: style.into(),
            tone: tone.into(),
            text: text.into(),
        }
    }

    /// Rendered text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Serialize for Prompt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}
