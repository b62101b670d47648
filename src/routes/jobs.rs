use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::job_dto::{JobListResponse, JobResponse},
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1/jobs",
    responses(
        (status = 200, description = "List of job postings")
    )
)]
#[axum::debug_handler]
pub async fn list_jobs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list();
    Ok(Json(JobListResponse { jobs }))
}

#[utoipa::path(
    get,
    path = "/api/v1/jobs/{job_id}",
    params(
        ("job_id" = i64, Path, description = "Job posting ID")
    ),
    responses(
        (status = 200, description = "Job found"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job_by_id(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let job = state
        .job_service
        .get_by_id(job_id)
        .ok_or_else(|| Error::NotFound(format!("Job with ID {} not found", job_id)))?;
    Ok(Json(JobResponse { job }))
}
