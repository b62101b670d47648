use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Question type tag. Selects both the prompt template and the JSON shape
/// the model is instructed to return:
/// - mcq: `{prompt, options, answer}`
/// - coding: `{prompt, input_spec, output_spec, examples}`
/// - audio: `{prompt_text, expected_keywords, rubric}`
/// - video: `{prompt_text, rubric, suggested_time_seconds}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Mcq,
    Coding,
    Audio,
    Video,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "mcq",
            QuestionType::Coding => "coding",
            QuestionType::Audio => "audio",
            QuestionType::Video => "video",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What one `generate` call produces. A failure is a value, not an error:
/// it serializes with an `error` key and callers branch on its presence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerationOutcome {
    Failure(GenerationFailure),
    /// The extracted JSON object, trusted as-is. No per-type schema
    /// validation happens here.
    Question(JsonValue),
}

impl GenerationOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, GenerationOutcome::Failure(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationFailure {
    /// Last raw model output, when one was received. Absent for transport
    /// failures that produced no text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    pub error: String,
}

/// Evaluation result: direct-parsed model JSON, or the raw text when the
/// model ignored the JSON instruction. Never an error past the transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvaluationOutcome {
    Raw { raw: String },
    Parsed(JsonValue),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&QuestionType::Mcq).unwrap(), r#""mcq""#);
        let t: QuestionType = serde_json::from_str(r#""coding""#).unwrap();
        assert_eq!(t, QuestionType::Coding);
    }

    #[test]
    fn failure_serializes_with_error_key() {
        let out = GenerationOutcome::Failure(GenerationFailure {
            raw: Some("nonsense".into()),
            error: "No JSON found after retries.".into(),
        });
        let val = serde_json::to_value(&out).unwrap();
        assert!(val.get("error").is_some());
        assert_eq!(val["raw"], "nonsense");
    }

    #[test]
    fn transport_failure_omits_raw() {
        let out = GenerationOutcome::Failure(GenerationFailure {
            raw: None,
            error: "connection refused".into(),
        });
        let val = serde_json::to_value(&out).unwrap();
        assert!(val.get("raw").is_none());
    }
}
