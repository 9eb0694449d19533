//! Google Gemini REST integration.

mod client;
mod conversion;
mod dto;
mod sse;

pub use client::GeminiClient;
