//! Request and response types for text generation.

use crate::Message;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Provider-neutral generation request.
///
/// # Examples
///
/// ```
/// use linkpost_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Hello!")])
///     .max_tokens(Some(100))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(*request.max_tokens(), Some(100));
/// assert_eq!(*request.model(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Getters, Builder)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate (provider default when None)
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
    /// Model identifier overriding the client default
    #[builder(default)]
    model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Single user-message request, the shape every post generation uses.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkpost_core::{GenerateRequest, Role};
    ///
    /// let request = GenerateRequest::from_prompt("Write about Docker", Some(256));
    /// assert_eq!(request.messages()[0].role, Role::User);
    /// assert_eq!(*request.max_tokens(), Some(256));
    /// ```
    pub fn from_prompt(prompt: impl Into<String>, max_tokens: Option<u32>) -> Self {
        Self {
            messages: vec![Message::user(prompt)],
            max_tokens,
            temperature: None,
            model: None,
        }
    }
}

/// Why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinishReason {
    /// Model completed naturally.
    Stop,
    /// Hit the output token limit.
    Length,
    /// Content was filtered by the provider.
    ContentFilter,
    /// Other/unknown reason.
    Other,
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the generated output
    pub output_tokens: u32,
    /// Total tokens billed
    pub total_tokens: u32,
}

/// Successful generation result.
///
/// Clients only hand out responses whose `text` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerateResponse {
    /// Generated text
    text: String,
    /// Why the provider stopped, when reported
    finish_reason: Option<FinishReason>,
    /// Token usage, when reported
    usage: Option<TokenUsage>,
}

impl GenerateResponse {
    /// Create a response with text only.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            finish_reason: None,
            usage: None,
        }
    }

    /// Attach a finish reason.
    pub fn with_finish_reason(mut self, reason: Option<FinishReason>) -> Self {
        self.finish_reason = reason;
        self
    }

    /// Attach token usage.
    pub fn with_usage(mut self, usage: Option<TokenUsage>) -> Self {
        self.usage = usage;
        self
    }

    /// Consume the response, keeping only the text.
    pub fn into_text(self) -> String {
        self.text
    }
}
