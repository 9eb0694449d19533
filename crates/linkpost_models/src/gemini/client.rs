//! Gemini REST client.

use super::conversion;
use super::dto::GeminiResponse;
use super::sse::SseBuffer;
use async_trait::async_trait;
use futures_util::StreamExt;
use linkpost_core::{GeminiSettings, GenerateRequest, GenerateResponse};
use linkpost_error::{GeminiError, GeminiErrorKind, LinkpostError, LinkpostResult};
use linkpost_interface::{ContentGenerator, GenerationStream, Streaming};
use reqwest::{Client, Response};
use tracing::{debug, error, info, instrument};

/// Gemini API client.
///
/// Holds only immutable configuration and a pooled HTTP client, so it can be
/// shared freely behind an `Arc`.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Creates a new Gemini client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API key is absent or blank (`MissingApiKey`)
    /// - The HTTP client cannot be initialized
    #[instrument(skip_all, fields(model = %settings.model()))]
    pub fn new(settings: &GeminiSettings) -> LinkpostResult<Self> {
        let api_key = settings
            .api_key()
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))?
            .to_string();

        let client = Client::builder()
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(base_url = %settings.base_url(), "Created Gemini client");

        Ok(Self {
            client,
            api_key,
            model: settings.model().clone(),
            base_url: settings.base_url().trim_end_matches('/').to_string(),
        })
    }

    fn resolve_model<'a>(&'a self, req: &'a GenerateRequest) -> &'a str {
        req.model().as_deref().unwrap_or(&self.model)
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{}:{}", self.base_url, model, method)
    }

    async fn post(&self, url: &str, req: &GenerateRequest) -> LinkpostResult<Response> {
        let body = conversion::to_gemini_request(req);

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Gemini request failed");
                GeminiError::new(GeminiErrorKind::Request(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = conversion::error_message(&body, status.canonical_reason());
            error!(status = status.as_u16(), error = %message, "Gemini API error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        Ok(response)
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    #[instrument(skip(self, req), fields(model = %self.resolve_model(req), max_tokens = ?req.max_tokens()))]
    async fn generate(&self, req: &GenerateRequest) -> LinkpostResult<GenerateResponse> {
        let url = self.endpoint(self.resolve_model(req), "generateContent");
        debug!(url = %url, "Sending Gemini generateContent request");

        let response = self.post(&url, req).await?;

        let body = response
            .text()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::Request(e.to_string())))?;
        let parsed: GeminiResponse = serde_json::from_str(&body)
            .map_err(|e| GeminiError::new(GeminiErrorKind::ResponseParse(e.to_string())))?;

        let generated = conversion::from_gemini_response(&parsed)?;

        if let Some(usage) = generated.usage() {
            info!(
                prompt_tokens = usage.prompt_tokens,
                output_tokens = usage.output_tokens,
                total_tokens = usage.total_tokens,
                "Gemini token usage"
            );
        }
        debug!(content_len = generated.text().len(), "Gemini generation complete");

        Ok(generated)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Streaming for GeminiClient {
    #[instrument(skip(self, req), fields(model = %self.resolve_model(req)))]
    async fn generate_stream(&self, req: &GenerateRequest) -> LinkpostResult<GenerationStream> {
        let url = format!(
            "{}?alt=sse",
            self.endpoint(self.resolve_model(req), "streamGenerateContent")
        );
        debug!(url = %url, "Opening Gemini stream");

        let response = self.post(&url, req).await?;
        let mut bytes = response.bytes_stream();

        let stream = async_stream::stream! {
            let mut sse = SseBuffer::default();

            while let Some(next) = bytes.next().await {
                let chunk = match next {
                    Ok(chunk) => chunk,
                    Err(e) => {
                        error!(error = ?e, "Gemini stream interrupted");
                        yield Err(LinkpostError::from(GeminiError::new(
                            GeminiErrorKind::StreamInterrupted(e.to_string()),
                        )));
                        return;
                    }
                };

                for payload in sse.push(&chunk) {
                    match conversion::chunk_from_event(&payload) {
                        Ok(Some(chunk)) => yield Ok(chunk),
                        Ok(None) => {}
                        Err(e) => {
                            yield Err(e);
                            return;
                        }
                    }
                }
            }

            if let Some(payload) = sse.finish() {
                match conversion::chunk_from_event(&payload) {
                    Ok(Some(chunk)) => yield Ok(chunk),
                    Ok(None) => {}
                    Err(e) => yield Err(e),
                }
            }
        };

        Ok(Box::pin(stream))
    }
}
