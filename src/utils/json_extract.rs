use serde_json::Value as JsonValue;

/// The two ways extraction can fail. Retry policy currently treats them
/// alike, but callers can tell them apart.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("no JSON object found in model output")]
    NoJsonFound,

    #[error("JSON span failed to parse: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Pulls a single JSON object out of free-form model text.
///
/// The span is the greedy first-`{` to last-`}` slice. The prompt templates
/// tell the model to emit only the object, so anything around it is noise
/// this scan is allowed to skip over.
pub fn extract_json(raw: &str) -> Result<JsonValue, ExtractError> {
    let start = raw.find('{').ok_or(ExtractError::NoJsonFound)?;
    let end = raw
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or(ExtractError::NoJsonFound)?;
    let value = serde_json::from_str(&raw[start..=end])?;
    Ok(value)
}
