//! Decoding of `generateContent` responses into shop listings.

use crate::error::LookupError;
use crate::types::{GenerateContentResponse, Shop};

/// Parses a raw `generateContent` response body into shops.
///
/// The text parts of the first candidate are concatenated and must decode
/// to a JSON array of [`Shop`] objects. A Markdown code fence around the
/// array is tolerated.
///
/// # Errors
///
/// - [`LookupError::Schema`] if the body is not a `generateContent`
///   envelope, or the generated text is not a well-formed shop array.
/// - [`LookupError::EmptyResponse`] if there is no candidate text.
pub fn parse_generate_content(body: &str) -> Result<Vec<Shop>, LookupError> {
    let envelope: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Schema {
            context: "generateContent response".to_string(),
            source: e,
        })?;

    let text = generated_text(&envelope).ok_or(LookupError::EmptyResponse)?;
    parse_shop_list(&text)
}

fn generated_text(envelope: &GenerateContentResponse) -> Option<String> {
    let parts = &envelope.candidates.first()?.content.as_ref()?.parts;
    let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

pub(crate) fn parse_shop_list(text: &str) -> Result<Vec<Shop>, LookupError> {
    serde_json::from_str::<Vec<Shop>>(strip_code_fence(text)).map_err(|e| LookupError::Schema {
        context: "generated shop list".to_string(),
        source: e,
    })
}

/// Removes a surrounding Markdown code fence (with or without a language tag).
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.split_once('\n') {
        Some((tag, body)) if !tag.trim_start().starts_with('[') => body,
        Some(_) => rest,
        // Single-line fence: drop a language tag glued to the payload.
        None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
    };
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}
