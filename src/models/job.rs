//! Job model
//!
//! A job is one judge run of a submission. Fields whose wire name contains an
//! underscore also accept the camelCase spelling, since object bodies arrive
//! transcoded while objects inside arrays keep their wire keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Judge verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Waiting,
    Running,
    Accepted,
    #[serde(rename = "Compilation Error")]
    CompilationError,
    #[serde(rename = "Compilation Success")]
    CompilationSuccess,
    #[serde(rename = "Wrong Answer")]
    WrongAnswer,
    #[serde(rename = "Runtime Error")]
    RuntimeError,
    #[serde(rename = "Time Limit Exceeded")]
    TimeLimitExceeded,
    #[serde(rename = "Memory Limit Exceeded")]
    MemoryLimitExceeded,
    #[serde(rename = "System Error")]
    SystemError,
    #[serde(rename = "SPJ Error")]
    SpecialJudgeError,
    Skipped,
}

impl Status {
    /// Get the label used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::Running => "Running",
            Self::Accepted => "Accepted",
            Self::CompilationError => "Compilation Error",
            Self::CompilationSuccess => "Compilation Success",
            Self::WrongAnswer => "Wrong Answer",
            Self::RuntimeError => "Runtime Error",
            Self::TimeLimitExceeded => "Time Limit Exceeded",
            Self::MemoryLimitExceeded => "Memory Limit Exceeded",
            Self::SystemError => "System Error",
            Self::SpecialJudgeError => "SPJ Error",
            Self::Skipped => "Skipped",
        }
    }

    /// Check if judging of this case or job is complete
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::Waiting | Self::Running)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Job lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Queueing,
    Running,
    Finished,
    Canceled,
}

/// Submission payload of `POST /jobs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequest {
    #[serde(alias = "userId")]
    pub user_id: i32,
    #[serde(alias = "problemId")]
    pub problem_id: i32,
    #[serde(alias = "contestId")]
    pub contest_id: i32,
    #[serde(alias = "sourceCode")]
    pub source_code: String,
    pub language: String,
}

/// Outcome of a single test case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCase {
    pub id: i32,
    pub result: Status,
    /// Run time in microseconds
    pub time: u64,
    /// Peak memory as reported by the judge
    pub memory: u64,
    pub info: String,
}

/// One judge run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i32,
    #[serde(alias = "createdTime")]
    pub created_time: DateTime<Utc>,
    #[serde(alias = "updatedTime")]
    pub updated_time: DateTime<Utc>,
    pub submission: JobRequest,
    pub state: JobStatus,
    pub result: Status,
    pub score: f64,
    pub cases: Vec<JobCase>,
}

impl Job {
    /// Check if the job reached a terminal state
    pub fn is_finished(&self) -> bool {
        matches!(self.state, JobStatus::Finished | JobStatus::Canceled)
    }

    /// Number of cases that were accepted
    pub fn accepted_cases(&self) -> usize {
        self.cases
            .iter()
            .filter(|case| case.result == Status::Accepted)
            .count()
    }
}

/// Filters of `GET /jobs`; keys serialize in camelCase and are converted to
/// snake_case when the query string is built
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contest_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<JobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Status>,
}
