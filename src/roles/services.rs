use super::models::{CreateRoleRequest, Role, UpdateRoleRequest};
use super::validators::RoleValidator;
use crate::common::pagination::fetch_page;
use crate::common::{ApiError, Cursor, Validator};
use sqlx::SqlitePool;
use tracing::info;

const ROLE_COLUMNS: &str = "SELECT id, name, created_at FROM roles";

pub struct RolesService {
    db: SqlitePool,
}

impl RolesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list(&self, cursor: Cursor) -> Result<Vec<Role>, ApiError> {
        fetch_page(&self.db, ROLE_COLUMNS, cursor).await
    }

    pub async fn get_role_by_id(&self, role_id: i64) -> Result<Role, ApiError> {
        sqlx::query_as::<_, Role>(&format!("{} WHERE id = ?", ROLE_COLUMNS))
            .bind(role_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Role not found".to_string()))
    }

    pub async fn create_role(&self, request: CreateRoleRequest) -> Result<Role, ApiError> {
        RoleValidator.validate(&request).into_result()?;

        let now = chrono::Utc::now().to_rfc3339();

        let role = sqlx::query_as::<_, Role>(
            r#"
            INSERT INTO roles (name, created_at)
            VALUES (?, ?)
            RETURNING id, name, created_at
            "#,
        )
        .bind(request.name.trim())
        .bind(&now)
        .fetch_one(&self.db)
        .await?;

        info!("Created role: {} ({})", role.name, role.id);

        Ok(role)
    }

    pub async fn update_role(&self, role_id: i64, request: UpdateRoleRequest) -> Result<Role, ApiError> {
        RoleValidator.validate(&request).into_result()?;

        sqlx::query_as::<_, Role>(
            r#"
            UPDATE roles SET name = COALESCE(?, name)
            WHERE id = ?
            RETURNING id, name, created_at
            "#,
        )
        .bind(request.name.as_deref().map(str::trim))
        .bind(role_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Role not found".to_string()))
    }

    /// Fails with a conflict while any user still holds the role.
    pub async fn delete_role(&self, role_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM roles WHERE id = ?")
            .bind(role_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::from_delete)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Role not found".to_string()));
        }

        info!("Deleted role: {}", role_id);

        Ok(())
    }
}
