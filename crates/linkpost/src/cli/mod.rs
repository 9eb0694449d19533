//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the linkpost binary.

mod commands;
mod inspect;
mod post;
mod server;

pub use commands::{Cli, Commands};
pub use inspect::{show_preview, show_profile, show_status};
pub use post::{generate_post, run_daily_post};
pub use server::handle_serve_command;
