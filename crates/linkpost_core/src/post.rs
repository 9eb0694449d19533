//! Published post identifiers.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A post accepted by the publish provider.
///
/// Both fields are the provider's values, returned verbatim.
///
/// # Examples
///
/// ```
/// use linkpost_core::PublishedPost;
///
/// let post: PublishedPost = serde_json::from_str(
///     r#"{"id":"urn:li:share:1","lifecycleState":"PUBLISHED"}"#,
/// ).unwrap();
/// assert_eq!(post.id(), "urn:li:share:1");
/// assert_eq!(post.lifecycle_state(), "PUBLISHED");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedPost {
    /// Provider-assigned post identifier
    id: String,
    /// Provider lifecycle label (e.g. "PUBLISHED")
    lifecycle_state: String,
}

impl PublishedPost {
    /// Create a published post record.
    pub fn new(id: impl Into<String>, lifecycle_state: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            lifecycle_state: lifecycle_state.into(),
        }
    }
}
