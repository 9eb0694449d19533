//! Message types for generation requests.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a generation request.
///
/// # Examples
///
/// ```
/// use linkpost_core::{Message, Role};
///
/// let message = Message::user("Write a post about Rust");
/// assert_eq!(message.role, Role::User);
/// assert!(message.text.contains("Rust"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text of the message
    pub text: String,
}

impl Message {
    /// Create a message from the user role.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }
}
