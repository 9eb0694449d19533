//! LinkedIn-specific error types.

/// LinkedIn-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LinkedInErrorKind {
    /// Access token or person URN missing
    #[display(
        "LinkedIn credentials not configured. Set LINKEDIN_ACCESS_TOKEN and LINKEDIN_PERSON_URN in environment variables."
    )]
    NotConfigured,
    /// Access token missing (profile lookups only need the token)
    #[display("LinkedIn access token not configured")]
    MissingAccessToken,
    /// Failed to build the HTTP client
    #[display("Failed to create LinkedIn client: {}", _0)]
    ClientCreation(String),
    /// Request never produced a response
    #[display("LinkedIn API request failed: {}", _0)]
    Request(String),
    /// Publish endpoint answered with a non-success status
    #[display("LinkedIn API error: {} - {}", status_code, message)]
    PublishRejected {
        /// HTTP status code returned by LinkedIn
        status_code: u16,
        /// Provider message, or the HTTP reason phrase when none was sent
        message: String,
    },
    /// Profile endpoint answered with a non-success status
    #[display("LinkedIn profile lookup failed: {} - {}", status_code, message)]
    ProfileRejected {
        /// HTTP status code returned by LinkedIn
        status_code: u16,
        /// Provider message, or the HTTP reason phrase when none was sent
        message: String,
    },
    /// Response body could not be decoded
    #[display("Failed to parse LinkedIn response: {}", _0)]
    ResponseParse(String),
}

/// LinkedIn error with source location tracking.
///
/// # Examples
///
/// ```
/// use linkpost_error::{LinkedInError, LinkedInErrorKind};
///
/// let err = LinkedInError::new(LinkedInErrorKind::PublishRejected {
///     status_code: 401,
///     message: "invalid token".to_string(),
/// });
/// assert!(format!("{}", err).contains("401 - invalid token"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("LinkedIn Error: {} at line {} in {}", kind, line, file)]
pub struct LinkedInError {
    /// The kind of error that occurred
    pub kind: LinkedInErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl LinkedInError {
    /// Create a new LinkedInError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LinkedInErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
