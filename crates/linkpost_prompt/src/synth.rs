//! Prompt rendering.

use crate::{POST_STYLES, POST_TONES, TOPICS};
use linkpost_core::Prompt;
use rand::Rng;
use rand::seq::SliceRandom;

const REQUIREMENTS: &str = "Requirements:
- Include relevant hashtags at the end
- Add a call-to-action or question to engage readers
- Make it valuable and actionable for the target audience
- The post should be ready to publish as-is, with proper formatting for LinkedIn.
- Return only the content. That's all. Don't add emojis. Max words 400. 
- Add reference at the bottom, Keep reference at max 2";

/// Build a prompt using the thread-local RNG.
///
/// A supplied topic, including the empty string, is used verbatim.
pub fn build_prompt(topic: Option<&str>) -> Prompt {
    build_prompt_with_rng(topic, &mut rand::thread_rng())
}

/// Build a prompt drawing catalog entries from `rng`.
///
/// # Examples
///
/// ```
/// use linkpost_prompt::build_prompt_with_rng;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let prompt = build_prompt_with_rng(Some("WebAssembly"), &mut rng);
/// assert_eq!(prompt.topic(), "WebAssembly");
/// assert!(prompt.as_str().contains("WebAssembly."));
/// ```
pub fn build_prompt_with_rng<R: Rng + ?Sized>(topic: Option<&str>, rng: &mut R) -> Prompt {
    let style = pick(&POST_STYLES, rng);
    let tone = pick(&POST_TONES, rng);

    let (topic, text) = match topic {
        Some(topic) => (topic, render_custom(topic, style, tone)),
        None => {
            let topic = pick(&TOPICS, rng);
            (topic, render(topic, style, tone))
        }
    };

    tracing::debug!(topic, style, tone, "Built prompt");
    Prompt::new(topic, style, tone, text)
}

/// Prompt with a random topic.
pub fn generate_prompt() -> Prompt {
    build_prompt(None)
}

/// Prompt for a caller-chosen topic.
pub fn generate_custom_prompt(topic: &str) -> Prompt {
    build_prompt(Some(topic))
}

fn pick<R: Rng + ?Sized>(catalog: &[&'static str], rng: &mut R) -> &'static str {
    // Catalogs are non-empty constants.
    catalog.choose(rng).copied().unwrap_or_default()
}

fn render(topic: &str, style: &str, tone: &str) -> String {
    format!(
        "Create a professional LinkedIn post about {topic}.\n\nStyle: {style} {topic}.\nTone: {tone}.\n{REQUIREMENTS}"
    )
}

fn render_custom(topic: &str, style: &str, tone: &str) -> String {
    format!(
        "Create a professional LinkedIn post about {topic}.\n\nStyle: {style} {topic}.\n\nTone: {tone}.\n{REQUIREMENTS}"
    )
}
