//! Prompt synthesis for LinkedIn posts.
//!
//! A prompt combines a topic, a style directive and a tone directive with a
//! fixed list of publishing requirements. Topic, style and tone are drawn
//! uniformly and independently from the catalogs in [`catalog`] unless the
//! caller supplies a topic, which is then used verbatim.
//!
//! # Examples
//!
//! ```
//! use linkpost_prompt::{generate_custom_prompt, POST_STYLES};
//!
//! let prompt = generate_custom_prompt("Rust");
//! assert!(prompt.as_str().starts_with("Create a professional LinkedIn post about Rust."));
//! assert!(POST_STYLES.contains(&prompt.style().as_str()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
mod synth;

pub use catalog::{POST_STYLES, POST_TONES, TOPICS};
pub use synth::{build_prompt, build_prompt_with_rng, generate_custom_prompt, generate_prompt};
