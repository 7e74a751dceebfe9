use super::models::{Company, CreateCompanyRequest, UpdateCompanyRequest};
use super::validators::CompanyValidator;
use crate::common::pagination::fetch_page;
use crate::common::{ApiError, Cursor, Validator};
use sqlx::SqlitePool;
use tracing::info;

const COMPANY_COLUMNS: &str = "SELECT id, name, created_at, updated_at FROM companies";

pub struct CompaniesService {
    db: SqlitePool,
}

impl CompaniesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    // ============================================================================
    // Company CRUD Operations
    // ============================================================================

    /// One page of companies, ascending by id
    pub async fn list(&self, cursor: Cursor) -> Result<Vec<Company>, ApiError> {
        fetch_page(&self.db, COMPANY_COLUMNS, cursor).await
    }

    /// Get company by ID
    pub async fn get_company_by_id(&self, company_id: i64) -> Result<Company, ApiError> {
        sqlx::query_as::<_, Company>(&format!("{} WHERE id = ?", COMPANY_COLUMNS))
            .bind(company_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Company not found".to_string()))
    }

    /// Create a new company
    pub async fn create_company(&self, request: CreateCompanyRequest) -> Result<Company, ApiError> {
        CompanyValidator.validate(&request).into_result()?;

        let now = chrono::Utc::now().to_rfc3339();

        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (name, created_at, updated_at)
            VALUES (?, ?, ?)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(request.name.trim())
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.db)
        .await?;

        info!("Created company: {} ({})", company.name, company.id);

        Ok(company)
    }

    /// Update an existing company
    pub async fn update_company(
        &self,
        company_id: i64,
        request: UpdateCompanyRequest,
    ) -> Result<Company, ApiError> {
        CompanyValidator.validate(&request).into_result()?;

        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies SET name = COALESCE(?, name), updated_at = ?
            WHERE id = ?
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(request.name.as_deref().map(str::trim))
        .bind(&now)
        .bind(company_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("Company not found".to_string()))
    }

    /// Delete a company
    pub async fn delete_company(&self, company_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = ?")
            .bind(company_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::from_delete)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Company not found".to_string()));
        }

        info!("Deleted company: {}", company_id);

        Ok(())
    }
}
