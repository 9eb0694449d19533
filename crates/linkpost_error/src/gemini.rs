//! Gemini-specific error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key missing from configuration
    #[display("GEMINI_API_KEY is not set in environment variables")]
    MissingApiKey,
    /// Failed to build the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// Request never produced a response (connection, TLS, timeout)
    #[display("Gemini API request failed: {}", _0)]
    Request(String),
    /// HTTP error with status code and provider message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body could not be decoded
    #[display("Failed to parse Gemini response: {}", _0)]
    ResponseParse(String),
    /// Provider answered successfully but produced no text
    #[display("No content generated from Gemini API")]
    EmptyGeneration,
    /// Stream was interrupted
    #[display("Stream interrupted: {}", _0)]
    StreamInterrupted(String),
}

impl GeminiErrorKind {
    /// Whether the provider itself (or the transport to it) failed.
    ///
    /// Configuration gaps and empty generations are not provider errors.
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            GeminiErrorKind::Request(_)
                | GeminiErrorKind::HttpError { .. }
                | GeminiErrorKind::ResponseParse(_)
                | GeminiErrorKind::StreamInterrupted(_)
        )
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use linkpost_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
