//! HTTP listener errors.

/// The API listener failed to bind or stopped with an I/O error.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error on port {}: {} at line {} in {}", port, message, line, file)]
pub struct ServerError {
    /// Port the listener was meant to serve
    pub port: u16,
    /// The underlying I/O message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ServerError {
    /// Record a listener failure on `port` at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkpost_error::ServerError;
    ///
    /// let err = ServerError::new(3000, "address in use");
    /// assert_eq!(err.port, 3000);
    /// assert!(err.to_string().starts_with("Server Error on port 3000: address in use"));
    /// ```
    #[track_caller]
    pub fn new(port: u16, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            port,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
