//! Plain-text report for scheduled runs.

use chrono::{DateTime, SecondsFormat, Utc};
use derive_getters::Getters;
use serde::Serialize;

/// Overall result of a scheduled run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum RunStatus {
    /// Content generated and published.
    #[display("Success")]
    Success,
    /// Anything else.
    #[display("Failed")]
    Failed,
}

/// Summary of a scheduled run.
///
/// `Display` renders the summary block printed by the scheduled command.
///
/// # Examples
///
/// ```
/// use linkpost_pipeline::{RunReport, RunStatus};
///
/// let report = RunReport::failed("GEMINI_API_KEY is not set in environment variables");
/// assert_eq!(*report.status(), RunStatus::Failed);
/// assert!(report.to_string().starts_with("=== Summary ===\nStatus: Failed\n"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct RunReport {
    /// Overall status
    status: RunStatus,
    /// Length of the published content in characters
    content_length: Option<usize>,
    /// Id of the published post
    post_id: Option<String>,
    /// Failure message
    error: Option<String>,
    /// When the run finished
    timestamp: DateTime<Utc>,
}

impl RunReport {
    /// Successful run.
    pub fn succeeded(content_length: usize, post_id: impl Into<String>) -> Self {
        Self {
            status: RunStatus::Success,
            content_length: Some(content_length),
            post_id: Some(post_id.into()),
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Failed run.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            status: RunStatus::Failed,
            content_length: None,
            post_id: None,
            error: Some(error.into()),
            timestamp: Utc::now(),
        }
    }

    /// Whether the run succeeded.
    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Success
    }

    /// Process exit code for the run.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Summary ===")?;
        writeln!(f, "Status: {}", self.status)?;
        if let Some(length) = self.content_length {
            writeln!(f, "Content Length: {} characters", length)?;
        }
        if let Some(post_id) = &self.post_id {
            writeln!(f, "LinkedIn Post ID: {}", post_id)?;
        }
        if let Some(error) = &self.error {
            writeln!(f, "Error: {}", error)?;
        }
        write!(
            f,
            "Timestamp: {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_summary_lists_post() {
        let report = RunReport::succeeded(812, "urn:li:share:1");
        let text = report.to_string();
        assert!(text.contains("Status: Success"));
        assert!(text.contains("Content Length: 812 characters"));
        assert!(text.contains("LinkedIn Post ID: urn:li:share:1"));
        assert!(!text.contains("Error:"));
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn failure_summary_has_error_and_exit_code() {
        let report = RunReport::failed("boom");
        let text = report.to_string();
        assert!(text.contains("Error: boom"));
        assert!(!text.contains("LinkedIn Post ID"));
        assert_eq!(report.exit_code(), 1);
    }
}
