use serde::{Deserialize, Serialize};

/// Canonical job posting shape. `description` and `duration` are always
/// present; collaborators that omit them get the defaults on deserialize,
/// so finalize-test never has to guess.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub job_id: i64,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_duration")]
    pub duration: i32,
}

fn default_duration() -> i32 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_without_optional_fields_gets_defaults() {
        let job: Job = serde_json::from_str(
            r#"{"job_id": 7, "title": "Rust Developer", "company": "Acme"}"#,
        )
        .unwrap();
        assert_eq!(job.description, "");
        assert_eq!(job.duration, 60);
    }
}
