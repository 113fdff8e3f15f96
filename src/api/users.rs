//! User endpoints

use serde::Deserialize;
use tracing::info;

use crate::client::{Backend, NO_QUERY};
use crate::constants::routes;
use crate::error::ClientResult;
use crate::models::{User, UserLogin, UserUpdate};

/// Body of a successful login; the same token is also set as a cookie
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

impl Backend {
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.get(routes::USERS, NO_QUERY).await
    }

    /// Create a user, or rename one when `update.id` is set
    pub async fn update_user(&self, update: &UserUpdate) -> ClientResult<User> {
        self.post(routes::USERS, update).await
    }

    /// Log in by user name. The backend answers with a `rustoj-token` cookie
    /// that is kept in the client's cookie jar for later requests.
    pub async fn login(&self, name: &str) -> ClientResult<LoginResponse> {
        let login = UserLogin {
            name: name.to_string(),
        };
        let response: LoginResponse = self.post(routes::LOGIN, &login).await?;
        info!(user = %name, "Logged in");
        Ok(response)
    }

    /// Liveness probe; the body is ignored
    pub async fn greet(&self) -> ClientResult<()> {
        self.get_ok(routes::GREET, NO_QUERY).await
    }
}
