//! Wiring configuration into providers.

use linkpost_core::LinkpostConfig;
use linkpost_error::{LinkpostError, LinkpostResult};
use linkpost_models::GeminiClient;
use linkpost_pipeline::{PostPipeline, RunReport};
use linkpost_server::AppState;
use linkpost_social::LinkedInClient;
use std::sync::Arc;
use tracing::{error, instrument};

/// Build the Gemini + LinkedIn pipeline.
///
/// # Errors
///
/// Fails when the Gemini API key is missing or an HTTP client cannot be
/// created. Missing LinkedIn credentials are not an error; the publisher
/// reports itself not ready instead.
pub fn build_pipeline(config: &LinkpostConfig) -> LinkpostResult<PostPipeline> {
    let generator = GeminiClient::new(config.gemini())?;
    let publisher = LinkedInClient::new(config.linkedin())?;
    Ok(PostPipeline::new(Arc::new(generator), Arc::new(publisher)))
}

/// Handler state for the HTTP server.
pub fn app_state(config: &LinkpostConfig) -> LinkpostResult<AppState> {
    let pipeline = build_pipeline(config)?;
    Ok(AppState::new(
        pipeline,
        config.server().clone(),
        config.gemini_configured(),
    ))
}

/// One scheduled run: random topic, publish required.
///
/// Never fails; every problem ends up in the report.
#[instrument(skip_all)]
pub async fn daily_post(config: &LinkpostConfig) -> RunReport {
    match build_pipeline(config) {
        Ok(pipeline) => pipeline.run_scheduled().await,
        Err(e) => failed_report(e, "Could not initialize providers"),
    }
}

/// Scheduled run over the outcome of configuration loading.
///
/// A load failure still produces a failed report, so the summary is always printed.
pub async fn daily_post_with_config(loaded: LinkpostResult<LinkpostConfig>) -> RunReport {
    match loaded {
        Ok(config) => daily_post(&config).await,
        Err(e) => failed_report(e, "Could not load configuration"),
    }
}

fn failed_report(error: LinkpostError, context: &str) -> RunReport {
    error!(error = %error, "{}", context);
    RunReport::failed(error.message())
}
