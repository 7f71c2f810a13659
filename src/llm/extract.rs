use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::llm::client::LlmError;

/// Recover a JSON value from free-form model output.
///
/// The payload may arrive fenced as ```json ... ``` anywhere in the text
/// (first block wins, surrounding prose ignored), wrapped whole in a bare
/// ``` fence, or as plain JSON. Anything that fails to parse once unwrapped
/// is a malformed-response error.
pub fn extract_json_payload(raw: &str) -> Result<Value, LlmError> {
    let unwrapped = match find_fenced_json(raw) {
        Some(inner) => inner,
        None => strip_code_fence(raw),
    };
    serde_json::from_str(unwrapped)
        .map_err(|e| LlmError::Malformed(format!("not valid JSON after unwrapping: {}", e)))
}

/// Extract and decode into a concrete payload type in one step.
pub fn decode_payload<T: DeserializeOwned>(raw: &str) -> Result<T, LlmError> {
    let value = extract_json_payload(raw)?;
    serde_json::from_value(value)
        .map_err(|e| LlmError::Malformed(format!("unexpected payload shape: {}", e)))
}

/// First ```json block anywhere in the text, up to its closing fence.
fn find_fenced_json(raw: &str) -> Option<&str> {
    let start = raw.find("```json")? + "```json".len();
    let rest = &raw[start..];
    let end = rest.find("```")?;
    Some(rest[..end].trim())
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let inner = if let Some(stripped) = trimmed.strip_prefix("```json") {
        stripped
    } else if let Some(stripped) = trimmed.strip_prefix("```") {
        stripped
    } else {
        return trimmed;
    };
    inner.trim().trim_end_matches("```").trim()
}
