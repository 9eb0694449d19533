//! Shared types for generator capabilities.

use linkpost_core::FinishReason;
use serde::{Deserialize, Serialize};

/// A chunk of streamed generation output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamChunk {
    /// Incremental text.
    pub text: String,
    /// Whether this is the final chunk.
    pub is_final: bool,
    /// Optional finish reason if final.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
}

impl StreamChunk {
    /// Intermediate chunk.
    pub fn partial(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
            finish_reason: None,
        }
    }

    /// Final chunk carrying the stop reason.
    pub fn last(text: impl Into<String>, finish_reason: Option<FinishReason>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
            finish_reason,
        }
    }
}
