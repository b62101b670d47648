//! Question generation: render the prompt, call the transport, extract the
//! JSON object, retry on formatting drift. LLMs sometimes wrap JSON in
//! prose despite instructions, so a small fixed retry budget with a fixed
//! 1s backoff buys resilience without unbounded cost.

use std::sync::Arc;
use std::time::Duration;

use crate::dto::question_dto::GenerationRequest;
use crate::models::question::{GenerationFailure, GenerationOutcome};
use crate::services::llm_client::{ChatParams, LlmTransport};
use crate::services::prompts;
use crate::utils::json_extract::{extract_json, ExtractError};

const GENERATION_PARAMS: ChatParams = ChatParams {
    temperature: 0.25,
    max_tokens: 600,
};

const RETRY_BACKOFF: Duration = Duration::from_secs(1);

#[derive(Clone)]
pub struct GeneratorService {
    transport: Arc<dyn LlmTransport>,
}

impl GeneratorService {
    pub fn new(transport: Arc<dyn LlmTransport>) -> Self {
        Self { transport }
    }

    /// Runs one bounded attempt sequence and always returns a value:
    /// the extracted question object (trusted as-is), or a failure payload
    /// carrying the last raw output and a diagnostic.
    ///
    /// Transport failures are fatal immediately. They are a different kind
    /// of problem than formatting drift and are never charged against the
    /// retry budget.
    pub async fn generate(&self, req: &GenerationRequest) -> GenerationOutcome {
        let prompt = prompts::render(req.question_type, &req.skill, &req.difficulty, req.options);
        let retries = req.retries.max(1);

        let mut last_failure: Option<(String, ExtractError)> = None;

        for attempt in 0..retries {
            let raw = match self
                .transport
                .complete(prompts::GENERATOR_SYSTEM_PROMPT, &prompt, GENERATION_PARAMS)
                .await
            {
                Ok(raw) => raw,
                Err(err) => {
                    tracing::error!(skill = %req.skill, %err, "LLM transport failed");
                    return GenerationOutcome::Failure(GenerationFailure {
                        raw: None,
                        error: err.to_string(),
                    });
                }
            };

            match extract_json(&raw) {
                Ok(value) => return GenerationOutcome::Question(value),
                Err(err) => {
                    tracing::warn!(
                        attempt,
                        skill = %req.skill,
                        "generation output had no usable JSON: {err}"
                    );
                    let is_last = attempt + 1 == retries;
                    last_failure = Some((raw, err));
                    if !is_last {
                        tokio::time::sleep(RETRY_BACKOFF).await;
                    }
                }
            }
        }

        let (raw, err) = last_failure.unwrap_or((String::new(), ExtractError::NoJsonFound));
        let error = match err {
            ExtractError::NoJsonFound => "No JSON found after retries.".to_string(),
            ExtractError::Malformed(_) => "Failed to parse JSON after retries.".to_string(),
        };
        GenerationOutcome::Failure(GenerationFailure {
            raw: Some(raw),
            error,
        })
    }
}
