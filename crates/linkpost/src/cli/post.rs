//! Post generation command handlers.

use futures_util::StreamExt;
use linkpost::{build_pipeline, daily_post_with_config};
use linkpost_core::{GenerateRequest, LinkpostConfig};
use linkpost_error::LinkpostResult;
use linkpost_interface::Streaming;
use linkpost_models::GeminiClient;
use linkpost_pipeline::{PostOptions, PostPipeline};
use std::io::Write;

/// Handle the `daily-post` command.
///
/// Prints the run summary and returns the process exit code.
pub async fn run_daily_post(loaded: LinkpostResult<LinkpostConfig>) -> i32 {
    tracing::info!("Starting daily LinkedIn post generation");

    let report = daily_post_with_config(loaded).await;
    println!("\n{}", report);

    if report.is_success() {
        tracing::info!(post_id = ?report.post_id(), "Daily post published");
    } else {
        tracing::error!(error = ?report.error(), "Daily post failed");
    }
    report.exit_code()
}

/// Handle the `generate` command. Never publishes.
pub async fn generate_post(
    config: &LinkpostConfig,
    topic: Option<String>,
    max_tokens: Option<u32>,
    stream: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = PostOptions::builder()
        .topic(topic)
        .max_tokens(max_tokens)
        .dry_run(true)
        .build()?;

    if !stream {
        let generated = build_pipeline(config)?.generate(&options).await?;
        println!("Prompt:\n{}\n", generated.prompt());
        println!("Content:\n{}", generated.content());
        println!("\nContent length: {} characters", generated.content().chars().count());
        return Ok(());
    }

    let client = GeminiClient::new(config.gemini())?;
    let prompt = PostPipeline::resolve_prompt(&options);
    println!("Prompt:\n{}\n", prompt);
    println!("Content:");

    let request = GenerateRequest::from_prompt(prompt.as_str(), options.token_budget());
    let mut chunks = client.generate_stream(&request).await?;
    let mut stdout = std::io::stdout();
    let mut length = 0;

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        length += chunk.text.chars().count();
        write!(stdout, "{}", chunk.text)?;
        stdout.flush()?;
        if chunk.is_final {
            tracing::debug!(finish_reason = ?chunk.finish_reason, "Stream finished");
        }
    }

    println!("\n\nContent length: {} characters", length);
    Ok(())
}
