use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Hiring pipeline stage. Stored as its snake_case name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum EmployeeStatus {
    #[default]
    ApplicationReceived,
    InterviewScheduled,
    Hired,
    NotAccepted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub designation: String,
    pub status: EmployeeStatus,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub company_id: i64,
    pub department_id: i64,
    /// `YYYY-MM-DD`
    pub hired_on: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    pub email: String,
    pub name: String,
    pub designation: String,
    pub status: Option<EmployeeStatus>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub company_id: i64,
    pub department_id: i64,
    pub hired_on: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub designation: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub mobile: Option<String>,
    pub address: Option<String>,
    pub company_id: Option<i64>,
    pub department_id: Option<i64>,
    pub hired_on: Option<String>,
}

impl UpdateEmployeeRequest {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.name.is_none()
            && self.designation.is_none()
            && self.status.is_none()
            && self.mobile.is_none()
            && self.address.is_none()
            && self.company_id.is_none()
            && self.department_id.is_none()
            && self.hired_on.is_none()
    }
}
