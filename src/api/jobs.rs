//! Job endpoints

use tracing::info;

use crate::client::{Backend, NO_QUERY, query_pairs};
use crate::constants::routes;
use crate::error::ClientResult;
use crate::models::{Job, JobQuery, JobRequest};

impl Backend {
    /// Submit source code for judging
    pub async fn submit_job(&self, request: &JobRequest) -> ClientResult<Job> {
        let job: Job = self.post(routes::JOBS, request).await?;
        info!(
            job_id = job.id,
            problem_id = request.problem_id,
            language = %request.language,
            "Job submitted"
        );
        Ok(job)
    }

    /// List jobs matching the given filters
    pub async fn list_jobs(&self, query: &JobQuery) -> ClientResult<Vec<Job>> {
        let pairs = query_pairs(query)?;
        self.get(routes::JOBS, &pairs).await
    }

    pub async fn get_job(&self, id: i32) -> ClientResult<Job> {
        self.get(&format!("{}/{}", routes::JOBS, id), NO_QUERY).await
    }
}
