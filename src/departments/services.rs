use super::models::{CreateDepartmentRequest, Department, UpdateDepartmentRequest};
use super::validators::DepartmentValidator;
use crate::common::pagination::fetch_page;
use crate::common::{ApiError, Cursor, Validator};
use sqlx::SqlitePool;
use tracing::info;

const DEPARTMENT_COLUMNS: &str =
    "SELECT id, name, company_id, head, created_at, updated_at FROM departments";

pub struct DepartmentsService {
    db: SqlitePool,
}

impl DepartmentsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list(&self, cursor: Cursor) -> Result<Vec<Department>, ApiError> {
        fetch_page(&self.db, DEPARTMENT_COLUMNS, cursor).await
    }

    pub async fn get_department_by_id(&self, department_id: i64) -> Result<Department, ApiError> {
        sqlx::query_as::<_, Department>(&format!("{} WHERE id = ?", DEPARTMENT_COLUMNS))
            .bind(department_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Department not found".to_string()))
    }

    /// Unknown `companyId` or `head` surface as validation errors through
    /// the foreign-key check.
    pub async fn create_department(
        &self,
        request: CreateDepartmentRequest,
    ) -> Result<Department, ApiError> {
        DepartmentValidator.validate(&request).into_result()?;

        let now = chrono::Utc::now().to_rfc3339();

        let department = sqlx::query_as::<_, Department>(
            r#"
            INSERT INTO departments (name, company_id, head, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, company_id, head, created_at, updated_at
            "#,
        )
        .bind(request.name.trim())
        .bind(request.company_id)
        .bind(request.head)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.db)
        .await?;

        info!(
            department_id = %department.id,
            company_id = %department.company_id,
            "Created department: {}",
            department.name
        );

        Ok(department)
    }

    /// Absent fields keep their stored value.
    pub async fn update_department(
        &self,
        department_id: i64,
        request: UpdateDepartmentRequest,
    ) -> Result<Department, ApiError> {
        DepartmentValidator.validate(&request).into_result()?;

        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query_as::<_, Department>(
            r#"
            UPDATE departments SET
                name = COALESCE(?, name),
                company_id = COALESCE(?, company_id),
                head = COALESCE(?, head),
                updated_at = ?
            WHERE id = ?
            RETURNING id, name, company_id, head, created_at, updated_at
            "#,
        )
        .bind(request.name.as_deref().map(str::trim))
        .bind(request.company_id)
        .bind(request.head)
        .bind(&now)
        .bind(department_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Department not found".to_string()))
    }

    pub async fn delete_department(&self, department_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM departments WHERE id = ?")
            .bind(department_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::from_delete)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Department not found".to_string()));
        }

        info!(department_id = %department_id, "Deleted department");

        Ok(())
    }
}
