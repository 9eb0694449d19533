//! Error types for the linkpost library.
//!
//! This crate provides the foundation error types used throughout the linkpost workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Every concrete error converts into [`LinkpostError`], so component code can
//! use `?` against [`LinkpostResult`].
//!
//! # Examples
//!
//! ```
//! use linkpost_error::{ConfigError, ConfigErrorKind, LinkpostResult};
//!
//! fn read_port() -> LinkpostResult<u16> {
//!     Err(ConfigError::new(ConfigErrorKind::Parse("PORT must be a number".into())))?
//! }
//!
//! match read_port() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod linkedin;
mod server;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{LinkpostError, LinkpostErrorKind, LinkpostResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use linkedin::{LinkedInError, LinkedInErrorKind};
pub use server::ServerError;
