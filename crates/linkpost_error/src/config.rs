//! Configuration loading errors.

/// Why configuration could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// An environment variable could not be applied over its config key.
    #[display("Failed to apply {}: {}", variable, reason)]
    Override {
        /// Environment variable name
        variable: String,
        /// Why it was rejected
        reason: String,
    },
    /// Config sources could not be read or merged.
    #[display("Failed to build configuration: {}", _0)]
    Build(String),
    /// Merged values do not fit the settings types (e.g. `PORT=abc`).
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use linkpost_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Parse("invalid digit found in string".into()));
/// assert!(err.kind.to_string().starts_with("Failed to parse configuration"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The kind of error that occurred
    pub kind: ConfigErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
