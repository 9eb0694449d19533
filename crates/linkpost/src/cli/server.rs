//! `serve` command handler.

use linkpost::app_state;
use linkpost_core::LinkpostConfig;
use linkpost_error::{LinkpostResult, ServerError};

/// Handle the `serve` command
pub async fn handle_serve_command(config: &LinkpostConfig, port: Option<u16>) -> LinkpostResult<()> {
    let port = port.unwrap_or(*config.server().port());
    let state = app_state(config)?;

    tracing::info!(port, "Starting LinkedIn post API. Press Ctrl+C to stop.");

    linkpost_server::serve(state, port)
        .await
        .map_err(|e| ServerError::new(port, e.to_string()))?;

    Ok(())
}
