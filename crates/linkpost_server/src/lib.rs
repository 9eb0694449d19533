//! HTTP API for the linkpost pipeline.
//!
//! Routes:
//! - `GET /health`
//! - `GET /api` (API info)
//! - `POST /api/post/new-post`
//! - `GET /api/post/preview`
//! - `GET /api/post/status`
//!
//! Every other route answers 404 with `{success: false, message: "Route not found"}`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod middleware;
mod routes;
mod server;
mod state;

pub use error::ApiError;
pub use routes::{NewPostRequest, create_router};
pub use server::{serve, shutdown_signal};
pub use state::AppState;

/// Current time as an ISO-8601 UTC string with millisecond precision.
pub(crate) fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
