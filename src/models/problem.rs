//! Problem model

use serde::{Deserialize, Serialize};

/// Problem as displayed to contestants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub problem_type: ProblemType,
    #[serde(rename = "desc", default)]
    pub description: String,
    /// Number of test cases
    pub cases: usize,
    /// Sum of all case scores
    pub score: f64,
}

/// Judging strategy of a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemType {
    Standard,
    Strict,
    #[serde(rename = "spj")]
    SpecialJudge,
    DynamicRanking,
}

impl std::fmt::Display for ProblemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Strict => write!(f, "strict"),
            Self::SpecialJudge => write!(f, "spj"),
            Self::DynamicRanking => write!(f, "dynamic_ranking"),
        }
    }
}
