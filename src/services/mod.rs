pub mod eval_service;
pub mod generator_service;
pub mod job_service;
pub mod llm_client;
pub mod prompts;
pub mod test_service;
