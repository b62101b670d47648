use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use assessment_backend::dto::question_dto::GenerationRequest;
use assessment_backend::models::question::{GenerationOutcome, QuestionType};
use assessment_backend::services::generator_service::GeneratorService;
use assessment_backend::services::llm_client::{ChatParams, LlmTransport, TransportError};
use async_trait::async_trait;

/// Replays a scripted sequence of transport results and counts invocations.
/// `Err(status)` plays back as an HTTP-status transport error.
struct ScriptedTransport {
    calls: AtomicUsize,
    script: Mutex<VecDeque<Result<String, u16>>>,
}

impl ScriptedTransport {
    fn new(script: Vec<Result<&str, u16>>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            script: Mutex::new(script.into_iter().map(|r| r.map(String::from)).collect()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmTransport for ScriptedTransport {
    async fn complete(
        &self,
        _system: &str,
        _user: &str,
        _params: ChatParams,
    ) -> Result<String, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("transport called more times than scripted");
        next.map_err(|status| TransportError::Status {
            status,
            body: "upstream unavailable".to_string(),
        })
    }
}

fn mcq_request(retries: u32) -> GenerationRequest {
    GenerationRequest {
        skill: "Python".to_string(),
        difficulty: "medium".to_string(),
        question_type: QuestionType::Mcq,
        options: 4,
        retries,
    }
}

const VALID_MCQ: &str =
    r#"{"prompt": "What does GIL stand for?", "options": ["a", "b", "c", "d"], "answer": "B"}"#;

#[tokio::test(start_paused = true)]
async fn exhausts_retry_budget_then_reports_last_raw_text() {
    let transport = ScriptedTransport::new(vec![
        Ok("I'd be happy to help!"),
        Ok("Certainly, here is a question."),
        Ok("still nothing machine-readable"),
    ]);
    let generator = GeneratorService::new(transport.clone());

    let outcome = generator.generate(&mcq_request(3)).await;

    assert_eq!(transport.calls(), 3);
    match outcome {
        GenerationOutcome::Failure(failure) => {
            assert_eq!(failure.raw.as_deref(), Some("still nothing machine-readable"));
            assert_eq!(failure.error, "No JSON found after retries.");
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn malformed_json_span_gets_its_own_diagnostic() {
    let transport =
        ScriptedTransport::new(vec![Ok("{not valid json}"), Ok("{still not valid}")]);
    let generator = GeneratorService::new(transport.clone());

    let outcome = generator.generate(&mcq_request(2)).await;

    assert_eq!(transport.calls(), 2);
    match outcome {
        GenerationOutcome::Failure(failure) => {
            assert_eq!(failure.error, "Failed to parse JSON after retries.");
            assert_eq!(failure.raw.as_deref(), Some("{still not valid}"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_failure_is_fatal_and_never_retried() {
    let transport = ScriptedTransport::new(vec![Err(503)]);
    let generator = GeneratorService::new(transport.clone());

    let outcome = generator.generate(&mcq_request(3)).await;

    assert_eq!(transport.calls(), 1);
    match outcome {
        GenerationOutcome::Failure(failure) => {
            assert!(failure.raw.is_none());
            assert!(failure.error.contains("503"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn recovers_on_second_attempt() {
    let transport = ScriptedTransport::new(vec![Ok("no JSON this time, sorry"), Ok(VALID_MCQ)]);
    let generator = GeneratorService::new(transport.clone());

    let outcome = generator.generate(&mcq_request(3)).await;

    assert_eq!(transport.calls(), 2);
    assert!(!outcome.is_failure());
}

#[tokio::test]
async fn first_attempt_success_skips_the_backoff_entirely() {
    let transport = ScriptedTransport::new(vec![Ok(VALID_MCQ)]);
    let generator = GeneratorService::new(transport.clone());

    let outcome = generator.generate(&mcq_request(3)).await;

    assert_eq!(transport.calls(), 1);
    match outcome {
        GenerationOutcome::Question(value) => {
            assert_eq!(value["options"].as_array().unwrap().len(), 4);
            let answer = value["answer"].as_str().unwrap();
            assert!(["A", "B", "C", "D"].contains(&answer));
        }
        other => panic!("expected question, got {other:?}"),
    }
}

#[tokio::test]
async fn prose_around_the_object_is_tolerated() {
    let wrapped = format!("Of course! Here you go:\n{VALID_MCQ}\nGood luck!");
    let transport = ScriptedTransport::new(vec![Ok(wrapped.as_str())]);
    let generator = GeneratorService::new(transport.clone());

    let outcome = generator.generate(&mcq_request(3)).await;

    assert_eq!(transport.calls(), 1);
    match outcome {
        GenerationOutcome::Question(value) => {
            assert_eq!(value["answer"], "B");
        }
        other => panic!("expected question, got {other:?}"),
    }
}

#[tokio::test]
async fn zero_retries_still_makes_one_attempt() {
    let transport = ScriptedTransport::new(vec![Ok(VALID_MCQ)]);
    let generator = GeneratorService::new(transport.clone());

    let outcome = generator.generate(&mcq_request(0)).await;

    assert_eq!(transport.calls(), 1);
    assert!(!outcome.is_failure());
}
