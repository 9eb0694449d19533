//! Read-only commands: preview, status and profile.

use linkpost_core::LinkpostConfig;
use linkpost_error::LinkpostResult;
use linkpost_social::LinkedInClient;

/// Print a random prompt.
pub fn show_preview() {
    let prompt = linkpost_prompt::generate_prompt();
    println!("Topic: {}", prompt.topic());
    println!("Style: {}", prompt.style());
    println!("Tone: {}\n", prompt.tone());
    println!("{}", prompt);
}

fn mark(configured: bool) -> &'static str {
    if configured { "configured" } else { "missing" }
}

/// Print provider configuration readiness.
pub fn show_status(config: &LinkpostConfig) {
    println!("Gemini:      {} (model {})", mark(config.gemini_configured()), config.gemini().model());
    println!("LinkedIn:    {}", mark(config.linkedin_configured()));
    println!("Environment: {}", config.server().effective_environment());
    println!("Port:        {}", config.server().port());
}

/// Print the LinkedIn profile behind the access token.
pub async fn show_profile(config: &LinkpostConfig) -> LinkpostResult<()> {
    let client = LinkedInClient::new(config.linkedin())?;
    let profile = client.user_profile().await?;
    let rendered = serde_json::to_string_pretty(&profile).unwrap_or_else(|_| profile.to_string());
    println!("{}", rendered);
    Ok(())
}
