//! Trait definitions for the linkpost pipeline.
//!
//! The pipeline talks to its providers only through these traits, so any
//! generator or publisher can be swapped in without touching orchestration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{ContentGenerator, GenerationStream, SocialPublisher, Streaming};
pub use types::StreamChunk;
