//! Wire types for the LinkedIn UGC posts API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UgcPost<'a> {
    pub author: &'a str,
    pub lifecycle_state: &'static str,
    pub specific_content: SpecificContent<'a>,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpecificContent<'a> {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    pub share_content: ShareContent<'a>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareContent<'a> {
    pub share_commentary: ShareCommentary<'a>,
    pub share_media_category: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareCommentary<'a> {
    pub text: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Visibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    pub member_network_visibility: &'static str,
}

impl<'a> UgcPost<'a> {
    /// Public text-only post.
    pub fn public_text(author: &'a str, text: &'a str) -> Self {
        Self {
            author,
            lifecycle_state: "PUBLISHED",
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: ShareCommentary { text },
                    share_media_category: "NONE",
                },
            },
            visibility: Visibility {
                member_network_visibility: "PUBLIC",
            },
        }
    }
}

/// Success body of `POST /ugcPosts`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UgcPostResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub lifecycle_state: Option<String>,
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkedInErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_matches_ugc_shape() {
        let payload = serde_json::to_value(UgcPost::public_text("urn:li:person:1", "Hello"))
            .expect("serialize");
        assert_eq!(
            payload,
            json!({
                "author": "urn:li:person:1",
                "lifecycleState": "PUBLISHED",
                "specificContent": {
                    "com.linkedin.ugc.ShareContent": {
                        "shareCommentary": { "text": "Hello" },
                        "shareMediaCategory": "NONE"
                    }
                },
                "visibility": { "com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC" }
            })
        );
    }
}
