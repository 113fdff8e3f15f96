//! Contest endpoints

use crate::client::{Backend, NO_QUERY, query_pairs};
use crate::constants::routes;
use crate::error::ClientResult;
use crate::models::{Contest, ContestUpdate, Problem, Ranking, RanklistQuery};

impl Backend {
    pub async fn list_contests(&self) -> ClientResult<Vec<Contest>> {
        self.get(routes::CONTESTS, NO_QUERY).await
    }

    pub async fn get_contest(&self, id: i32) -> ClientResult<Contest> {
        self.get(&format!("{}/{}", routes::CONTESTS, id), NO_QUERY)
            .await
    }

    /// Create a contest, or update one when `update.id` is set
    pub async fn update_contest(&self, update: &ContestUpdate) -> ClientResult<Contest> {
        self.post(routes::CONTESTS, update).await
    }

    /// Problems of a contest, in contest order
    pub async fn contest_problems(&self, id: i32) -> ClientResult<Vec<Problem>> {
        self.get(&format!("{}/{}/problems", routes::CONTESTS, id), NO_QUERY)
            .await
    }

    /// Ranklist of a contest; [`routes::GLOBAL_CONTEST_ID`] ranks all jobs
    pub async fn ranklist(&self, id: i32, query: &RanklistQuery) -> ClientResult<Vec<Ranking>> {
        let pairs = query_pairs(query)?;
        self.get(&format!("{}/{}/ranklist", routes::CONTESTS, id), &pairs)
            .await
    }
}
