//! Route table.

mod info;
mod posts;

pub use posts::NewPostRequest;

use crate::{ApiError, AppState, middleware};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Build the application router with tracing, CORS and security headers.
pub fn create_router(state: AppState) -> Router {
    let post_routes = Router::new()
        .route("/new-post", post(posts::new_post).fallback(not_found))
        .route("/preview", get(posts::preview).fallback(not_found))
        .route("/status", get(posts::status).fallback(not_found));

    let router = Router::new()
        .route("/health", get(info::health).fallback(not_found))
        .route("/api", get(info::api_info).fallback(not_found))
        .nest("/api/post", post_routes)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive());

    middleware::with_security_headers(router).with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::not_found()
}
