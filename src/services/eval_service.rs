//! Answer evaluation. Deliberately weaker failure handling than generation:
//! exactly one transport call, no retry, no brace-scan — a transport failure
//! propagates to the caller, and unparsable output degrades to a raw-text
//! payload the caller can inspect.

use std::sync::Arc;

use crate::dto::question_dto::EvaluationRequest;
use crate::error::Result;
use crate::models::question::EvaluationOutcome;
use crate::services::llm_client::{ChatParams, LlmTransport};
use crate::services::prompts;
use serde_json::Value as JsonValue;

const EVALUATION_PARAMS: ChatParams = ChatParams {
    temperature: 0.2,
    max_tokens: 400,
};

#[derive(Clone)]
pub struct EvalService {
    transport: Arc<dyn LlmTransport>,
}

impl EvalService {
    pub fn new(transport: Arc<dyn LlmTransport>) -> Self {
        Self { transport }
    }

    pub async fn evaluate(&self, req: &EvaluationRequest) -> Result<EvaluationOutcome> {
        let prompt = prompts::render_evaluation(req)?;

        let raw = self
            .transport
            .complete(prompts::EVALUATOR_SYSTEM_PROMPT, &prompt, EVALUATION_PARAMS)
            .await?;

        // Direct parse, not the lenient extractor.
        Ok(match serde_json::from_str::<JsonValue>(&raw) {
            Ok(value) => EvaluationOutcome::Parsed(value),
            Err(_) => EvaluationOutcome::Raw { raw },
        })
    }
}
