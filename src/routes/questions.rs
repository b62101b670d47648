use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value as JsonValue};
use validator::Validate;

use crate::{
    dto::question_dto::{
        EvaluationRequest, FinalizeTestPayload, FinalizeTestResponse, GenerateTestResponse,
        GenerationRequest,
    },
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/v1/generate-test",
    responses(
        (status = 200, description = "Questions generated (individual entries may carry a failure payload)"),
        (status = 400, description = "Missing or malformed skills"),
        (status = 500, description = "Internal failure")
    )
)]
#[axum::debug_handler]
pub async fn generate_test(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Result<impl IntoResponse> {
    // Body is taken loose on purpose: a missing `skills` key is a 400 with
    // a diagnostic, not a framework-level rejection.
    let skills = body
        .get("skills")
        .cloned()
        .ok_or_else(|| Error::BadRequest("Invalid request, missing skills".to_string()))?;

    let requests: Vec<GenerationRequest> = serde_json::from_value(skills)
        .map_err(|e| Error::BadRequest(format!("Invalid skills payload: {}", e)))?;
    if requests.is_empty() {
        return Err(Error::BadRequest("Invalid request, missing skills".to_string()));
    }

    for request in &requests {
        request.validate()?;
    }

    let mut questions = Vec::with_capacity(requests.len());
    for request in &requests {
        // Sequential by design: each entry runs its own bounded retry loop.
        questions.push(state.generator_service.generate(request).await);
    }

    Ok(Json(GenerateTestResponse {
        status: "success",
        questions,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/finalize-test",
    responses(
        (status = 201, description = "Question set stored"),
        (status = 400, description = "Missing questions or job_id"),
        (status = 404, description = "Job not found"),
        (status = 500, description = "Database failure, fully rolled back")
    )
)]
#[axum::debug_handler]
pub async fn finalize_test(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Result<Response> {
    if body.get("questions").is_none() {
        return Err(Error::BadRequest(
            "Invalid request, missing questions".to_string(),
        ));
    }
    if body.get("job_id").is_none() {
        return Err(Error::BadRequest("Missing job_id".to_string()));
    }

    let payload: FinalizeTestPayload = serde_json::from_value(body)
        .map_err(|e| Error::BadRequest(format!("Invalid finalize payload: {}", e)))?;
    payload.validate()?;

    match state.test_service.finalize(&payload).await {
        Ok(finalized) => {
            let message = format!("Test '{}' stored successfully", finalized.job_title);
            let response = FinalizeTestResponse {
                status: "success",
                question_set_id: finalized.question_set_id,
                job_id: finalized.job_id,
                job_title: finalized.job_title,
                expiry_time: finalized.expiry_time,
                message,
            };
            Ok((StatusCode::CREATED, Json(response)).into_response())
        }
        Err(Error::Database(err)) => {
            tracing::error!(%err, "finalize-test transaction failed");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "message": err.to_string() })),
            )
                .into_response())
        }
        Err(other) => Err(other),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/evaluate-answer",
    responses(
        (status = 200, description = "Evaluation result, or a raw-text fallback when the model ignored the JSON instruction"),
        (status = 400, description = "Unsupported question type"),
        (status = 500, description = "LLM transport failure")
    )
)]
#[axum::debug_handler]
pub async fn evaluate_answer(
    State(state): State<AppState>,
    Json(payload): Json<EvaluationRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let outcome = state.eval_service.evaluate(&payload).await?;
    Ok(Json(outcome))
}
