pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::services::{
    eval_service::EvalService, generator_service::GeneratorService, job_service::JobService,
    llm_client::{LlmTransport, OpenRouterClient}, test_service::TestService,
};
use reqwest::Client;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub job_service: JobService,
    pub generator_service: GeneratorService,
    pub eval_service: EvalService,
    pub test_service: TestService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap();

        let transport: Arc<dyn LlmTransport> = Arc::new(OpenRouterClient::new(
            http_client.clone(),
            config.openrouter_url.clone(),
            config.openrouter_api_key.clone(),
            config.openrouter_model.clone(),
        ));

        Self::with_transport(pool, transport, http_client, config.jobs_base_url.clone())
    }

    /// State with an injected transport. Tests use this to drive the full
    /// router against scripted LLM output.
    pub fn with_transport(
        pool: PgPool,
        transport: Arc<dyn LlmTransport>,
        http_client: Client,
        jobs_base_url: String,
    ) -> Self {
        let job_service = JobService::new();
        let generator_service = GeneratorService::new(transport.clone());
        let eval_service = EvalService::new(transport);
        let test_service = TestService::new(pool.clone(), http_client, jobs_base_url);

        Self {
            pool,
            job_service,
            generator_service,
            eval_service,
            test_service,
        }
    }
}
