//! Contest and ranking models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// Contest record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contest {
    pub id: i32,
    pub name: String,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    #[serde(alias = "problemIds")]
    pub problem_ids: Vec<i32>,
    #[serde(alias = "userIds")]
    pub user_ids: Vec<i32>,
    #[serde(alias = "submissionLimit")]
    pub submission_limit: i32,
}

impl Contest {
    /// Check if the given instant falls inside the contest window
    pub fn is_running_at(&self, at: DateTime<Utc>) -> bool {
        self.from <= at && at <= self.to
    }
}

/// Body of `POST /contests`: updates the contest when `id` is set, creates one otherwise
#[derive(Debug, Clone, Serialize)]
pub struct ContestUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub problem_ids: Vec<i32>,
    pub user_ids: Vec<i32>,
    pub submission_limit: i32,
}

/// One row of a ranklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub user: User,
    pub rank: i32,
    /// Score per problem, in contest problem order
    pub scores: Vec<f64>,
}

impl Ranking {
    pub fn total_score(&self) -> f64 {
        self.scores.iter().sum()
    }
}

/// Which submission counts for a user on a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    #[default]
    Latest,
    Highest,
}

/// Ordering applied between users with equal scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreaker {
    SubmissionTime,
    SubmissionCount,
    UserId,
}

/// Query of `GET /contests/{id}/ranklist`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RanklistQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring_rule: Option<ScoringRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tie_breaker: Option<TieBreaker>,
}
