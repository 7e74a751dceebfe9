use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::auth::models::Identity;

/// Full users row, password hash included. Never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub role_id: i64,
}

impl UserRecord {
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            email: self.email.clone(),
            role: self.role_id,
        }
    }
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[sqlx(rename = "role_id")]
    pub role: i64,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub role: i64,
}
