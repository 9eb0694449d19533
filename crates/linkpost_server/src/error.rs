//! Error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use linkpost_error::LinkpostError;
use serde::Serialize;
use serde_json::Value;

/// An error rendered as `{success: false, message, error?, data?}`.
///
/// With diagnostics enabled (development mode) the body also carries
/// `stack` (the error's origin as `file:line`) and `debug`.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    error: Option<String>,
    data: Option<Value>,
    stack: Option<String>,
    debug: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    success: bool,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    debug: Option<&'a str>,
}

impl ApiError {
    /// Error with a status and message.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            error: None,
            data: None,
            stack: None,
            debug: None,
        }
    }

    /// 400 Bad Request.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 404 for unmatched routes.
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Route not found")
    }

    /// 500 Internal Server Error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Attach the underlying error's message, plus diagnostics when enabled.
    pub fn with_source(mut self, source: &LinkpostError, diagnostics: bool) -> Self {
        self.error = Some(source.message());
        if diagnostics {
            let (file, line) = source.location();
            self.stack = Some(format!("{}:{}", file, line));
            self.debug = Some(format!("{:?}", source));
        }
        self
    }

    /// Attach a `data` payload.
    pub fn with_data(mut self, data: impl Serialize) -> Self {
        self.data = serde_json::to_value(data).ok();
        self
    }

    /// HTTP status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Top-level message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = self.status.as_u16(), message = %self.message, error = ?self.error, "Request failed");
        } else {
            tracing::debug!(status = self.status.as_u16(), message = %self.message, "Request rejected");
        }

        let body = ErrorBody {
            success: false,
            message: &self.message,
            error: self.error.as_deref(),
            data: self.data.as_ref(),
            stack: self.stack.as_deref(),
            debug: self.debug.as_deref(),
        };
        (self.status, Json(body)).into_response()
    }
}
