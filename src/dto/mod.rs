pub mod job_dto;
pub mod question_dto;
