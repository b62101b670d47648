//! Prompt template registry. Pure data: each template tells the model to
//! emit a single JSON object with the keys its question type expects, and
//! nothing else. That instruction is advisory — the extractor and retry
//! loop downstream tolerate models that ignore it.

use crate::dto::question_dto::EvaluationRequest;
use crate::error::{Error, Result};
use crate::models::question::QuestionType;

pub const GENERATOR_SYSTEM_PROMPT: &str = "You are a helpful interview question generator.";
pub const EVALUATOR_SYSTEM_PROMPT: &str =
    "You are a strict and fair evaluator for technical questions.";

/// Renders the generation prompt for a question type. Total over the enum:
/// unrecognized tags never reach this point, deserialization rejects them.
pub fn render(question_type: QuestionType, skill: &str, difficulty: &str, options: u32) -> String {
    match question_type {
        QuestionType::Mcq => format!(
            "Generate a single multiple-choice question for the skill '{skill}' at the '{difficulty}' level.\n\
             Provide exactly {options} answer choices labeled A, B, C, D.\n\n\
             Format the response as valid JSON with keys:\n\n\
             - \"prompt\": The question text.\n\
             - \"options\": An array of answer choices.\n\
             - \"answer\": A single letter (A, B, C, or D).\n\n\
             IMPORTANT: Only output JSON. Do not include explanations, extra text, or notes.\n\
             Ensure the JSON is valid and properly formatted."
        ),
        QuestionType::Coding => format!(
            "Create a single coding question for the skill '{skill}' at the '{difficulty}' level.\n\n\
             Format the response as valid JSON with keys:\n\n\
             - \"prompt\": The problem statement.\n\
             - \"input_spec\": Description of input format.\n\
             - \"output_spec\": Description of output format.\n\
             - \"examples\": An array of example inputs and outputs.\n\n\
             IMPORTANT: Only output JSON. Do not include explanations, extra text, or notes.\n\
             Ensure the JSON is valid and properly formatted."
        ),
        QuestionType::Audio => format!(
            "Generate a concise interview question for the skill '{skill}' at the '{difficulty}' level.\n\n\
             Format the response as valid JSON with keys:\n\n\
             - \"prompt_text\": The question text.\n\
             - \"expected_keywords\": An array of keywords expected in a good answer.\n\
             - \"rubric\": A brief evaluation rubric.\n\n\
             IMPORTANT: Only output JSON. Do not include explanations, extra text, or notes.\n\
             Ensure the JSON is valid and properly formatted."
        ),
        QuestionType::Video => format!(
            "Generate a concise interview question for the skill '{skill}' at the '{difficulty}' level.\n\n\
             Format the response as valid JSON with keys:\n\n\
             - \"prompt_text\": The question text.\n\
             - \"rubric\": A brief evaluation rubric.\n\
             - \"suggested_time_seconds\": Recommended time in seconds for the candidate's response.\n\n\
             IMPORTANT: Only output JSON. Do not include explanations, extra text, or notes.\n\
             Ensure the JSON is valid and properly formatted."
        ),
    }
}

/// Renders the evaluation prompt. Only mcq and coding answers are gradable;
/// anything else is a caller bug and fails fast, never retried.
pub fn render_evaluation(req: &EvaluationRequest) -> Result<String> {
    match req.question_type {
        QuestionType::Mcq => Ok(format!(
            "You are an evaluator for multiple-choice questions.\n\
             Question: {}\n\
             Correct Answer: {}\n\
             Candidate Answer: {}\n\
             Evaluate if the candidate's answer is correct.\n\
             Return JSON ONLY with keys: is_correct (true/false), score (0 or 1), feedback (short sentence).",
            req.question_text, req.correct_answer, req.candidate_answer
        )),
        QuestionType::Coding => Ok(format!(
            "You are an evaluator for coding questions.\n\
             Question: {}\n\
             Expected Solution Description: {}\n\
             Candidate Code:\n{}\n\
             Evaluate correctness and efficiency. \
             Return JSON ONLY with keys: score (0-10), feedback (short explanation).",
            req.question_text, req.correct_answer, req.candidate_answer
        )),
        other => Err(Error::Config(format!(
            "Unsupported question_type for evaluation: {}",
            other
        ))),
    }
}
