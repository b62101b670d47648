pub mod job;
pub mod question;
