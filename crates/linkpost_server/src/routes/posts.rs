//! `/api/post` handlers.

use crate::{ApiError, AppState, timestamp};
use axum::{
    Form, Json,
    body::Bytes,
    extract::{FromRequest, Request, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use linkpost_core::Prompt;
use linkpost_pipeline::{GeneratedPost, PipelineError, PostOptions, PostOutcome, PostPipeline};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument};

const DRY_RUN_MESSAGE: &str = "Content generated successfully (dry run - not posted)";
const PUBLISHED_MESSAGE: &str = "Content generated and posted to LinkedIn successfully";
const FAILURE_MESSAGE: &str = "Failed to generate or post content";
const NOT_CONFIGURED_MESSAGE: &str = "LinkedIn credentials not configured. Set LINKEDIN_ACCESS_TOKEN and LINKEDIN_PERSON_URN in environment variables, or use dryRun: true to test without posting.";
const READY_MESSAGE: &str = "All services are configured and ready";
const MISSING_MESSAGE: &str = "LinkedIn credentials missing. Set LINKEDIN_ACCESS_TOKEN and LINKEDIN_PERSON_URN in environment variables.";

/// Body of `POST /api/post/new-post`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPostRequest {
    /// Topic override
    pub topic: Option<String>,
    /// Output token budget
    pub max_tokens: Option<u32>,
    /// Generate without publishing
    pub dry_run: Option<bool>,
}

impl From<NewPostRequest> for PostOptions {
    fn from(request: NewPostRequest) -> Self {
        PostOptions::builder()
            .topic(request.topic)
            .max_tokens(request.max_tokens)
            .dry_run(request.dry_run.unwrap_or(false))
            .build()
            .unwrap_or_default()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PostData<'a> {
    content: &'a str,
    prompt: &'a Prompt,
    #[serde(skip_serializing_if = "Option::is_none")]
    linked_in_post_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    linked_in_post_state: Option<&'a str>,
    timestamp: String,
}

impl<'a> PostData<'a> {
    fn generated(generated: &'a GeneratedPost) -> Self {
        Self {
            content: generated.content(),
            prompt: generated.prompt(),
            linked_in_post_id: None,
            linked_in_post_state: None,
            timestamp: timestamp(),
        }
    }
}

/// How a request body is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return BodyKind::Other;
    };

    let mime = value.split(';').next().unwrap_or_default().trim();
    if mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json") {
        BodyKind::Json
    } else if mime.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

/// Decode a JSON body; an empty body counts as `{}`.
fn parse_json(body: &Bytes) -> Result<NewPostRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(NewPostRequest::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        ApiError::bad_request("Invalid JSON body").with_data(json!({ "detail": e.to_string() }))
    })
}

/// Decode the request body as JSON or form fields.
///
/// Bodies with any other content type count as `{}`.
async fn read_body(request: Request) -> Result<NewPostRequest, ApiError> {
    match body_kind(request.headers()) {
        BodyKind::Json => {
            let body = Bytes::from_request(request, &()).await.map_err(|e| {
                ApiError::bad_request("Invalid request body")
                    .with_data(json!({ "detail": e.body_text() }))
            })?;
            parse_json(&body)
        }
        BodyKind::Form => {
            let Form(parsed) = Form::<NewPostRequest>::from_request(request, &())
                .await
                .map_err(|e| {
                    ApiError::bad_request("Invalid form body")
                        .with_data(json!({ "detail": e.body_text() }))
                })?;
            Ok(parsed)
        }
        BodyKind::Other => Ok(NewPostRequest::default()),
    }
}

#[instrument(skip_all)]
pub async fn new_post(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ApiError> {
    let body = read_body(request).await?;
    info!(topic = ?body.topic, max_tokens = ?body.max_tokens, dry_run = ?body.dry_run, "New post requested");

    let diagnostics = state.expose_diagnostics();
    let outcome = state
        .pipeline()
        .run(&PostOptions::from(body))
        .await
        .map_err(|e| failure(e, diagnostics))?;

    let response = match &outcome {
        PostOutcome::DryRun(generated) => Json(json!({
            "success": true,
            "message": DRY_RUN_MESSAGE,
            "data": PostData::generated(generated),
        }))
        .into_response(),
        PostOutcome::PublishSkipped(generated) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "message": NOT_CONFIGURED_MESSAGE,
                "data": PostData::generated(generated),
            })),
        )
            .into_response(),
        PostOutcome::Published { generated, post } => {
            let data = PostData {
                linked_in_post_id: Some(post.id()),
                linked_in_post_state: Some(post.lifecycle_state()),
                ..PostData::generated(generated)
            };
            Json(json!({
                "success": true,
                "message": PUBLISHED_MESSAGE,
                "data": data,
            }))
            .into_response()
        }
    };

    Ok(response)
}

/// 500 response; publish failures keep the generated content in `data`.
fn failure(error: PipelineError, diagnostics: bool) -> ApiError {
    let api_error = ApiError::internal(FAILURE_MESSAGE).with_source(error.error(), diagnostics);
    match error.generated() {
        Some(generated) => api_error.with_data(PostData::generated(generated)),
        None => api_error,
    }
}

pub async fn preview() -> Json<serde_json::Value> {
    let prompt = PostPipeline::resolve_prompt(&PostOptions::default());
    Json(json!({
        "success": true,
        "message": "Preview prompt generated",
        "data": {
            "prompt": prompt,
            "note": "This is what will be sent to Gemini to generate content",
            "timestamp": timestamp(),
        },
    }))
}

pub async fn status(State(state): State<AppState>) -> Json<serde_json::Value> {
    let linkedin_configured = state.pipeline().publisher_ready();
    let message = if linkedin_configured {
        READY_MESSAGE
    } else {
        MISSING_MESSAGE
    };
    Json(json!({
        "success": true,
        "data": {
            "linkedInConfigured": linkedin_configured,
            "geminiConfigured": *state.gemini_configured(),
            "message": message,
            "timestamp": timestamp(),
        },
    }))
}
