//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Author of a message in a generation request.
///
/// Serializes to the lowercase names the Gemini API expects.
///
/// # Examples
///
/// ```
/// use linkpost_core::Role;
///
/// assert_eq!(format!("{}", Role::User), "user");
/// assert_ne!(Role::User, Role::Model);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Messages from the human side of the conversation
    #[display("user")]
    User,
    /// Messages previously produced by the model
    #[display("model")]
    Model,
}
