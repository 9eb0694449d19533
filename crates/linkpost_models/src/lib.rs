//! Content generation providers for linkpost.
//!
//! Currently a single provider, Google Gemini, spoken to over its REST API.
//!
//! # Example
//!
//! ```no_run
//! use linkpost_core::{GeminiSettings, GenerateRequest};
//! use linkpost_interface::ContentGenerator;
//! use linkpost_models::GeminiClient;
//!
//! # async fn run() -> linkpost_error::LinkpostResult<()> {
//! let settings = GeminiSettings::builder()
//!     .api_key(Some("key".to_string()))
//!     .build()
//!     .expect("valid settings");
//! let client = GeminiClient::new(&settings)?;
//! let response = client
//!     .generate(&GenerateRequest::from_prompt("Write about Rust", Some(200)))
//!     .await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::GeminiClient;
