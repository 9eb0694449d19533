//! Shared handler state.

use derive_getters::Getters;
use linkpost_core::ServerSettings;
use linkpost_pipeline::PostPipeline;
use std::time::Instant;

/// State shared by every handler.
#[derive(Debug, Clone, Getters)]
pub struct AppState {
    /// Generate-then-publish pipeline
    pipeline: PostPipeline,
    /// Port, environment and API version
    settings: ServerSettings,
    /// Whether a Gemini API key was configured
    gemini_configured: bool,
    /// Process start, for the uptime report
    started_at: Instant,
}

impl AppState {
    /// Create handler state.
    pub fn new(pipeline: PostPipeline, settings: ServerSettings, gemini_configured: bool) -> Self {
        Self {
            pipeline,
            settings,
            gemini_configured,
            started_at: Instant::now(),
        }
    }

    /// Whether error responses include diagnostics.
    pub fn expose_diagnostics(&self) -> bool {
        self.settings.diagnostics_enabled()
    }
}
