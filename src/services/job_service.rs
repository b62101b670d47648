use crate::models::job::Job;

/// Static in-memory job catalog. Stands in for the real job board this
/// service fronts; finalize-test resolves jobs through the HTTP interface,
/// not through this struct, so swapping in a live source stays invisible.
#[derive(Clone, Default)]
pub struct JobService;

impl JobService {
    pub fn new() -> Self {
        Self
    }

    pub fn list(&self) -> Vec<Job> {
        seed_jobs()
    }

    pub fn get_by_id(&self, job_id: i64) -> Option<Job> {
        seed_jobs().into_iter().find(|j| j.job_id == job_id)
    }
}

fn seed_jobs() -> Vec<Job> {
    vec![
        Job {
            job_id: 100,
            title: "Python Developer".to_string(),
            company: "Netfotech".to_string(),
            description: "Develop Python applications".to_string(),
            duration: 90,
        },
        Job {
            job_id: 101,
            title: "Backend Engineer".to_string(),
            company: "Netfotech".to_string(),
            description: "Design and operate backend services".to_string(),
            duration: 60,
        },
        Job {
            job_id: 102,
            title: "Data Analyst".to_string(),
            company: "Netfotech".to_string(),
            description: "Build reports and dashboards".to_string(),
            duration: 45,
        },
    ]
}
