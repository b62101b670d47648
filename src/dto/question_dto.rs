use crate::models::question::{GenerationOutcome, QuestionType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;
use validator::Validate;

/// One requested question: the immutable input to a single bounded
/// generation attempt sequence.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerationRequest {
    #[validate(length(min = 1))]
    pub skill: String,
    #[validate(length(min = 1))]
    pub difficulty: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Number of answer choices; only meaningful for mcq.
    #[serde(default = "default_options")]
    pub options: u32,
    /// Total transport attempts before giving up on unparsable output.
    #[serde(default = "default_retries")]
    pub retries: u32,
}

fn default_options() -> u32 {
    4
}

fn default_retries() -> u32 {
    3
}

#[derive(Debug, Serialize)]
pub struct GenerateTestResponse {
    pub status: &'static str,
    pub questions: Vec<GenerationOutcome>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FinalizeQuestion {
    pub question_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[validate(length(min = 1))]
    pub skill: String,
    #[validate(length(min = 1))]
    pub difficulty: String,
    pub content: JsonValue,
    pub time_limit: Option<i32>,
    pub positive_marking: Option<i32>,
    pub negative_marking: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FinalizeTestPayload {
    pub job_id: i64,
    #[validate(length(min = 1))]
    pub questions: Vec<FinalizeQuestion>,
}

#[derive(Debug, Serialize)]
pub struct FinalizeTestResponse {
    pub status: &'static str,
    pub question_set_id: Uuid,
    pub job_id: i64,
    pub job_title: String,
    pub expiry_time: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EvaluationRequest {
    pub question_type: QuestionType,
    #[validate(length(min = 1))]
    pub question_text: String,
    pub correct_answer: String,
    pub candidate_answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_request_defaults() {
        let req: GenerationRequest = serde_json::from_str(
            r#"{"skill": "Python", "difficulty": "medium", "type": "mcq"}"#,
        )
        .unwrap();
        assert_eq!(req.options, 4);
        assert_eq!(req.retries, 3);
        assert_eq!(req.question_type, QuestionType::Mcq);
    }
}
