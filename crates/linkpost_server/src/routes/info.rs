//! Health and API description routes.

use crate::{AppState, timestamp};
use axum::{Json, extract::State};
use serde_json::{Value, json};

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": timestamp(),
        "uptime": state.started_at().elapsed().as_secs_f64(),
        "runtime": "Rust",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn api_info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "LinkedIn Post Bot API",
        "version": state.settings().api_version(),
        "endpoints": {
            "post": {
                "newPost": "POST /api/post/new-post - Generate and post content to LinkedIn",
                "preview": "GET /api/post/preview - Preview prompt without posting",
                "status": "GET /api/post/status - Check service configuration status",
            },
        },
        "documentation": {
            "newPost": {
                "method": "POST",
                "path": "/api/post/new-post",
                "description": "Generate content using Gemini AI and post to LinkedIn",
                "body": {
                    "topic": "(optional) Specific topic to write about",
                    "maxTokens": "(optional) Max tokens for content generation",
                    "dryRun": "(optional) Set to true to generate without posting",
                },
            },
        },
    }))
}
