use super::models::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
use super::validators::EmployeeValidator;
use crate::common::pagination::fetch_page;
use crate::common::{safe_email_log, ApiError, Cursor, Validator};
use crate::users::services::normalize_email;
use sqlx::SqlitePool;
use tracing::info;

const EMPLOYEE_COLUMNS: &str = "SELECT id, email, name, designation, status, mobile, address, \
     company_id, department_id, hired_on, created_at, updated_at FROM employees";

const EMPLOYEE_RETURNING: &str = "RETURNING id, email, name, designation, status, mobile, \
     address, company_id, department_id, hired_on, created_at, updated_at";

pub struct EmployeesService {
    db: SqlitePool,
}

impl EmployeesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list(&self, cursor: Cursor) -> Result<Vec<Employee>, ApiError> {
        fetch_page(&self.db, EMPLOYEE_COLUMNS, cursor).await
    }

    pub async fn get_employee_by_id(&self, employee_id: i64) -> Result<Employee, ApiError> {
        sqlx::query_as::<_, Employee>(&format!("{} WHERE id = ?", EMPLOYEE_COLUMNS))
            .bind(employee_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Employee not found".to_string()))
    }

    pub async fn create_employee(&self, request: CreateEmployeeRequest) -> Result<Employee, ApiError> {
        EmployeeValidator.validate(&request).into_result()?;

        let now = chrono::Utc::now().to_rfc3339();
        let email = normalize_email(&request.email);

        let sql = format!(
            "INSERT INTO employees (email, name, designation, status, mobile, address, \
             company_id, department_id, hired_on, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) {}",
            EMPLOYEE_RETURNING
        );

        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(&email)
            .bind(request.name.trim())
            .bind(request.designation.trim())
            .bind(request.status.unwrap_or_default())
            .bind(request.mobile.as_deref().map(str::trim))
            .bind(request.address.as_deref().map(str::trim))
            .bind(request.company_id)
            .bind(request.department_id)
            .bind(request.hired_on.as_deref().map(str::trim))
            .bind(&now)
            .bind(&now)
            .fetch_one(&self.db)
            .await?;

        info!(
            employee_id = %employee.id,
            department_id = %employee.department_id,
            "Created employee: {}",
            safe_email_log(&employee.email)
        );

        Ok(employee)
    }

    /// Applies any subset of fields; the rest keep their stored value.
    pub async fn update_employee(
        &self,
        employee_id: i64,
        request: UpdateEmployeeRequest,
    ) -> Result<Employee, ApiError> {
        EmployeeValidator.validate(&request).into_result()?;

        let now = chrono::Utc::now().to_rfc3339();
        let email = request.email.as_deref().map(normalize_email);

        let sql = format!(
            "UPDATE employees SET \
                email = COALESCE(?, email), \
                name = COALESCE(?, name), \
                designation = COALESCE(?, designation), \
                status = COALESCE(?, status), \
                mobile = COALESCE(?, mobile), \
                address = COALESCE(?, address), \
                company_id = COALESCE(?, company_id), \
                department_id = COALESCE(?, department_id), \
                hired_on = COALESCE(?, hired_on), \
                updated_at = ? \
             WHERE id = ? {}",
            EMPLOYEE_RETURNING
        );

        sqlx::query_as::<_, Employee>(&sql)
            .bind(email)
            .bind(request.name.as_deref().map(str::trim))
            .bind(request.designation.as_deref().map(str::trim))
            .bind(request.status)
            .bind(request.mobile.as_deref().map(str::trim))
            .bind(request.address.as_deref().map(str::trim))
            .bind(request.company_id)
            .bind(request.department_id)
            .bind(request.hired_on.as_deref().map(str::trim))
            .bind(&now)
            .bind(employee_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Employee not found".to_string()))
    }

    /// Departments headed by this employee lose their head.
    pub async fn delete_employee(&self, employee_id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(employee_id)
            .execute(&self.db)
            .await
            .map_err(ApiError::from_delete)?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Employee not found".to_string()));
        }

        info!(employee_id = %employee_id, "Deleted employee");

        Ok(())
    }
}
