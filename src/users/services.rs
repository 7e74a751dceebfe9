use sqlx::SqlitePool;
use tracing::info;

use super::models::{CreateUserRequest, User, UserRecord};
use super::validators::CreateUserValidator;
use crate::auth::password::PasswordHasher;
use crate::common::pagination::fetch_page;
use crate::common::{safe_email_log, ApiError, Cursor, Validator};

const USER_COLUMNS: &str = "SELECT id, email, role_id, created_at FROM users";

/// Emails are compared case-insensitively by storing them lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub struct UsersService {
    db: SqlitePool,
}

impl UsersService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, ApiError> {
        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT id, email, password_hash, role_id FROM users WHERE email = ?",
        )
        .bind(normalize_email(email))
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }

    pub async fn get_by_id(&self, user_id: i64) -> Result<User, ApiError> {
        sqlx::query_as::<_, User>(&format!("{} WHERE id = ?", USER_COLUMNS))
            .bind(user_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| ApiError::NotFound("user not found".to_string()))
    }

    pub async fn list(&self, cursor: Cursor) -> Result<Vec<User>, ApiError> {
        fetch_page(&self.db, USER_COLUMNS, cursor).await
    }

    /// Validates, hashes the password off the async executor, and inserts.
    pub async fn create(
        &self,
        passwords: &PasswordHasher,
        request: CreateUserRequest,
    ) -> Result<User, ApiError> {
        CreateUserValidator.validate(&request).into_result()?;

        let email = normalize_email(&request.email);
        let password_hash = passwords.hash(request.password).await?;
        let now = chrono::Utc::now().to_rfc3339();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, role_id, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, email, role_id, created_at
            "#,
        )
        .bind(&email)
        .bind(&password_hash)
        .bind(request.role)
        .bind(&now)
        .fetch_one(&self.db)
        .await?;

        info!(user_id = %user.id, email = %safe_email_log(&user.email), "Created user");

        Ok(user)
    }
}
