//! User model

use serde::{Deserialize, Serialize};

/// Identity record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
}

/// Body of `POST /users`: renames the user when `id` is set, creates one otherwise
#[derive(Debug, Clone, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
}

impl UserUpdate {
    /// Request creating a new user
    pub fn create(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Request renaming an existing user
    pub fn rename(id: i32, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }
}

/// Body of `POST /users/login`
#[derive(Debug, Clone, Serialize)]
pub struct UserLogin {
    pub name: String,
}
