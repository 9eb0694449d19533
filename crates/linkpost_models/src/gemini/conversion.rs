//! Conversion between linkpost types and Gemini wire types.

use super::dto::{
    GeminiContent, GeminiErrorBody, GeminiPart, GeminiRequest, GeminiResponse, GenerationConfig,
};
use linkpost_core::{FinishReason, GenerateRequest, GenerateResponse, Role, TokenUsage};
use linkpost_error::{GeminiError, GeminiErrorKind, LinkpostResult};
use linkpost_interface::StreamChunk;

pub fn to_gemini_request(req: &GenerateRequest) -> GeminiRequest {
    let contents = req
        .messages()
        .iter()
        .map(|message| GeminiContent {
            role: Some(
                match message.role {
                    Role::User => "user",
                    Role::Model => "model",
                }
                .to_string(),
            ),
            parts: vec![GeminiPart {
                text: message.text.clone(),
            }],
        })
        .collect();

    let generation_config = if req.max_tokens().is_some() || req.temperature().is_some() {
        Some(GenerationConfig {
            max_output_tokens: *req.max_tokens(),
            temperature: *req.temperature(),
        })
    } else {
        None
    };

    GeminiRequest {
        contents,
        generation_config,
    }
}

/// Concatenated text of the first candidate's parts.
fn first_candidate_text(response: &GeminiResponse) -> String {
    response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| content.parts.iter().map(|part| part.text.as_str()).collect::<String>())
        .unwrap_or_default()
}

fn first_finish_reason(response: &GeminiResponse) -> Option<FinishReason> {
    response
        .candidates
        .first()
        .and_then(|candidate| candidate.finish_reason.as_deref())
        .map(map_finish_reason)
}

pub fn map_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "STOP" => FinishReason::Stop,
        "MAX_TOKENS" => FinishReason::Length,
        "SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT" | "SPII" => {
            FinishReason::ContentFilter
        }
        _ => FinishReason::Other,
    }
}

pub fn from_gemini_response(response: &GeminiResponse) -> LinkpostResult<GenerateResponse> {
    let text = first_candidate_text(response);
    if text.trim().is_empty() {
        return Err(GeminiError::new(GeminiErrorKind::EmptyGeneration).into());
    }

    let usage = response.usage_metadata.map(|usage| TokenUsage {
        prompt_tokens: usage.prompt_token_count,
        output_tokens: usage.candidates_token_count,
        total_tokens: usage.total_token_count,
    });

    Ok(GenerateResponse::new(text)
        .with_finish_reason(first_finish_reason(response))
        .with_usage(usage))
}

/// Parse one streamed event payload. Events without text produce `None`.
pub fn chunk_from_event(payload: &str) -> LinkpostResult<Option<StreamChunk>> {
    let response: GeminiResponse = serde_json::from_str(payload).map_err(|e| {
        GeminiError::new(GeminiErrorKind::ResponseParse(format!(
            "Invalid stream event: {}",
            e
        )))
    })?;

    let text = first_candidate_text(&response);
    if text.is_empty() {
        return Ok(None);
    }

    Ok(Some(match first_finish_reason(&response) {
        Some(reason) => StreamChunk::last(text, Some(reason)),
        None => StreamChunk::partial(text),
    }))
}

/// Provider message from an error body, falling back to the raw body, then the reason phrase.
pub fn error_message(body: &str, reason: Option<&str>) -> String {
    serde_json::from_str::<GeminiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error.message)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .or_else(|| reason.map(str::to_string))
        .unwrap_or_else(|| "Unknown error".to_string())
}
