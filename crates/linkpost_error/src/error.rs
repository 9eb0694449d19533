//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, LinkedInError, ServerError};

/// Every error condition the linkpost crates can produce.
///
/// # Examples
///
/// ```
/// use linkpost_error::{LinkpostError, ServerError};
///
/// let err: LinkpostError = ServerError::new(3000, "address in use").into();
/// assert!(format!("{}", err).contains("Server Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LinkpostErrorKind {
    /// API listener error
    #[from(ServerError)]
    Server(ServerError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Content generation provider error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Publish provider error
    #[from(LinkedInError)]
    LinkedIn(LinkedInError),
}

/// Linkpost error with kind discrimination.
///
/// # Examples
///
/// ```
/// use linkpost_error::{ConfigError, ConfigErrorKind, LinkpostError, LinkpostResult};
///
/// fn might_fail() -> LinkpostResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::Build("missing file".into())))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Linkpost Error: {}", _0)]
pub struct LinkpostError(Box<LinkpostErrorKind>);

impl LinkpostError {
    /// Create a new error from a kind.
    pub fn new(kind: LinkpostErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LinkpostErrorKind {
        &self.0
    }

    /// Human-facing message without the source location suffix.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkpost_error::{LinkpostError, LinkedInError, LinkedInErrorKind};
    ///
    /// let err: LinkpostError = LinkedInError::new(LinkedInErrorKind::PublishRejected {
    ///     status_code: 401,
    ///     message: "invalid token".to_string(),
    /// })
    /// .into();
    /// assert_eq!(err.message(), "LinkedIn API error: 401 - invalid token");
    /// ```
    pub fn message(&self) -> String {
        match self.kind() {
            LinkpostErrorKind::Server(e) => format!("port {}: {}", e.port, e.message),
            LinkpostErrorKind::Config(e) => e.kind.to_string(),
            LinkpostErrorKind::Gemini(e) => e.kind.to_string(),
            LinkpostErrorKind::LinkedIn(e) => e.kind.to_string(),
        }
    }

    /// Source file and line where the underlying error was created.
    pub fn location(&self) -> (&'static str, u32) {
        match self.kind() {
            LinkpostErrorKind::Server(e) => (e.file, e.line),
            LinkpostErrorKind::Config(e) => (e.file, e.line),
            LinkpostErrorKind::Gemini(e) => (e.file, e.line),
            LinkpostErrorKind::LinkedIn(e) => (e.file, e.line),
        }
    }
}

// Generic From implementation for any type that converts to LinkpostErrorKind
impl<T> From<T> for LinkpostError
where
    T: Into<LinkpostErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for linkpost operations.
pub type LinkpostResult<T> = std::result::Result<T, LinkpostError>;
