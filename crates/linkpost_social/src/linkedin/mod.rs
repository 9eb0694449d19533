//! LinkedIn UGC posts integration.

mod client;
mod dto;

pub use client::LinkedInClient;
