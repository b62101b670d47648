//! Finalize-test orchestration: resolve the job over HTTP, then write the
//! question set and all of its questions inside one transaction. Either
//! every row lands or none do.

use crate::dto::question_dto::FinalizeTestPayload;
use crate::error::{Error, Result};
use crate::models::job::Job;
use crate::utils::time::{expiry_from, now};
use chrono::{DateTime, Utc};
use reqwest::Client;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug)]
pub struct FinalizedTest {
    pub question_set_id: Uuid,
    pub job_id: i64,
    pub job_title: String,
    pub expiry_time: DateTime<Utc>,
}

#[derive(Clone)]
pub struct TestService {
    pool: PgPool,
    http: Client,
    jobs_base_url: String,
}

impl TestService {
    pub fn new(pool: PgPool, http: Client, jobs_base_url: String) -> Self {
        Self {
            pool,
            http,
            jobs_base_url,
        }
    }

    pub async fn finalize(&self, payload: &FinalizeTestPayload) -> Result<FinalizedTest> {
        let job = self.fetch_job(payload.job_id).await?;

        let created_at = now();
        let expiry_time = expiry_from(created_at);
        let question_set_id = Uuid::new_v4();

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO question_set (id, job_id, title, description, duration, created_at, expiry_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(question_set_id)
        .bind(job.job_id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(job.duration)
        .bind(created_at)
        .bind(expiry_time)
        .execute(&mut *tx)
        .await?;

        for q in &payload.questions {
            let question_id = q.question_id.unwrap_or_else(Uuid::new_v4);
            sqlx::query(
                r#"
                INSERT INTO questions (
                    id, question_set_id, type, skill, difficulty,
                    content, time_limit, positive_marking, negative_marking, created_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                "#,
            )
            .bind(question_id)
            .bind(question_set_id)
            .bind(q.question_type.as_str())
            .bind(&q.skill)
            .bind(&q.difficulty)
            .bind(q.content.clone())
            .bind(q.time_limit.unwrap_or(60))
            .bind(q.positive_marking.unwrap_or(0))
            .bind(q.negative_marking.unwrap_or(0))
            .bind(created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            %question_set_id,
            job_id = payload.job_id,
            questions = payload.questions.len(),
            "question set stored"
        );

        Ok(FinalizedTest {
            question_set_id,
            job_id: payload.job_id,
            job_title: job.title,
            expiry_time,
        })
    }

    /// Resolves job metadata through the job-listing HTTP interface rather
    /// than in-process, so the catalog can live behind a different service.
    async fn fetch_job(&self, job_id: i64) -> Result<Job> {
        let url = format!("{}/api/v1/jobs/{}", self.jobs_base_url, job_id);
        let resp = self.http.get(&url).send().await?;

        if !resp.status().is_success() {
            return Err(Error::NotFound(format!("Job with ID {} not found", job_id)));
        }

        let body: serde_json::Value = resp.json().await?;
        let job_value = body
            .get("job")
            .cloned()
            .ok_or_else(|| Error::Internal("Job response missing 'job' field".to_string()))?;
        let job: Job = serde_json::from_value(job_value)?;
        Ok(job)
    }
}
