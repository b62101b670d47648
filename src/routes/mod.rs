pub mod health;
pub mod jobs;
pub mod questions;

use axum::{
    routing::{get, post},
    Router,
};

use crate::middleware::rate_limit;
use crate::AppState;

/// Builds the versioned API router. Layers (CORS, tracing, body limits)
/// are the binary's concern; tests drive this router directly.
pub fn api_router(state: AppState, api_rps: u32) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .merge(
            Router::new()
                .route("/api/v1/jobs", get(jobs::list_jobs))
                .route("/api/v1/jobs/:job_id", get(jobs::get_job_by_id))
                .route("/api/v1/generate-test", post(questions::generate_test))
                .route("/api/v1/finalize-test", post(questions::finalize_test))
                .route("/api/v1/evaluate-answer", post(questions::evaluate_answer))
                .layer(axum::middleware::from_fn_with_state(
                    rate_limit::RequestBudget::new(api_rps),
                    rate_limit::limit_requests,
                )),
        )
        .with_state(state)
}
