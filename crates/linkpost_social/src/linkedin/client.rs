//! LinkedIn REST client.

use super::dto::{LinkedInErrorBody, UgcPost, UgcPostResponse};
use async_trait::async_trait;
use linkpost_core::{LinkedInSettings, PublishedPost};
use linkpost_error::{LinkedInError, LinkedInErrorKind, LinkpostResult};
use linkpost_interface::SocialPublisher;
use reqwest::{Client, Response};
use tracing::{debug, error, info, instrument, warn};

const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";
const RESTLI_ID_HEADER: &str = "x-restli-id";

/// LinkedIn publish client.
///
/// Construction never fails on missing credentials; it warns and reports
/// `is_ready() == false` instead, so dry runs work without LinkedIn access.
#[derive(Clone)]
pub struct LinkedInClient {
    client: Client,
    access_token: Option<String>,
    person_urn: Option<String>,
    base_url: String,
}

impl std::fmt::Debug for LinkedInClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkedInClient")
            .field("person_urn", &self.person_urn)
            .field("base_url", &self.base_url)
            .field("ready", &self.is_ready())
            .finish_non_exhaustive()
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl LinkedInClient {
    /// Creates a new LinkedIn client.
    ///
    /// # Errors
    ///
    /// Returns an error only if the HTTP client cannot be initialized.
    #[instrument(skip_all)]
    pub fn new(settings: &LinkedInSettings) -> LinkpostResult<Self> {
        let access_token = non_blank(settings.access_token());
        let person_urn = non_blank(settings.person_urn());

        if access_token.is_none() {
            warn!("LINKEDIN_ACCESS_TOKEN is not set in environment variables");
        }
        if person_urn.is_none() {
            warn!("LINKEDIN_PERSON_URN is not set in environment variables");
        }

        let client = Client::builder()
            .build()
            .map_err(|e| LinkedInError::new(LinkedInErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            client,
            access_token,
            person_urn,
            base_url: settings.base_url().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the authenticated member's OpenID profile (`GET /userinfo`).
    ///
    /// Only the access token is required. The profile JSON is returned as-is.
    #[instrument(skip(self))]
    pub async fn user_profile(&self) -> LinkpostResult<serde_json::Value> {
        let token = self
            .access_token
            .as_deref()
            .ok_or_else(|| LinkedInError::new(LinkedInErrorKind::MissingAccessToken))?;

        let url = format!("{}/userinfo", self.base_url);
        debug!(url = %url, "Fetching LinkedIn profile");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| LinkedInError::new(LinkedInErrorKind::Request(e.to_string())))?;

        let response = check_status(response, |status_code, message| {
            LinkedInErrorKind::ProfileRejected {
                status_code,
                message,
            }
        })
        .await?;
        let profile = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| LinkedInError::new(LinkedInErrorKind::ResponseParse(e.to_string())))?;

        Ok(profile)
    }
}

/// Map non-2xx responses through `reject`, preferring the provider's message.
async fn check_status(
    response: Response,
    reject: fn(u16, String) -> LinkedInErrorKind,
) -> LinkpostResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<LinkedInErrorBody>(&body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_default();

    error!(status = status.as_u16(), error = %message, "LinkedIn API error");
    Err(LinkedInError::new(reject(status.as_u16(), message)).into())
}

#[async_trait]
impl SocialPublisher for LinkedInClient {
    fn is_ready(&self) -> bool {
        self.access_token.is_some() && self.person_urn.is_some()
    }

    #[instrument(skip(self, text), fields(content_len = text.len()))]
    async fn publish(&self, text: &str) -> LinkpostResult<PublishedPost> {
        let (Some(token), Some(author)) = (self.access_token.as_deref(), self.person_urn.as_deref())
        else {
            return Err(LinkedInError::new(LinkedInErrorKind::NotConfigured).into());
        };

        let url = format!("{}/ugcPosts", self.base_url);
        debug!(url = %url, author, "Publishing LinkedIn post");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header("X-Restli-Protocol-Version", RESTLI_PROTOCOL_VERSION)
            .json(&UgcPost::public_text(author, text))
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "LinkedIn request failed");
                LinkedInError::new(LinkedInErrorKind::Request(e.to_string()))
            })?;

        let response = check_status(response, |status_code, message| {
            LinkedInErrorKind::PublishRejected {
                status_code,
                message,
            }
        })
        .await?;
        let header_id = response
            .headers()
            .get(RESTLI_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .json::<UgcPostResponse>()
            .await
            .map_err(|e| LinkedInError::new(LinkedInErrorKind::ResponseParse(e.to_string())))?;

        // The id may arrive only in the X-RestLi-Id header.
        let id = body.id.or(header_id).ok_or_else(|| {
            LinkedInError::new(LinkedInErrorKind::ResponseParse(
                "response carried no post id".to_string(),
            ))
        })?;
        let post = PublishedPost::new(id, body.lifecycle_state.unwrap_or_default());

        info!(post_id = %post.id(), lifecycle_state = %post.lifecycle_state(), "Posted to LinkedIn");
        Ok(post)
    }

    fn platform_name(&self) -> &'static str {
        "linkedin"
    }
}
