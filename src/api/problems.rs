//! Problem endpoints

use crate::client::{Backend, NO_QUERY};
use crate::constants::routes;
use crate::error::ClientResult;
use crate::models::Problem;

impl Backend {
    pub async fn get_problem(&self, id: i32) -> ClientResult<Problem> {
        self.get(&format!("{}/{}", routes::PROBLEMS, id), NO_QUERY)
            .await
    }
}
