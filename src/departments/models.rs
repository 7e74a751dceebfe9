use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub company_id: i64,
    /// Employee id of the department head
    pub head: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub company_id: i64,
    pub head: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentRequest {
    pub name: Option<String>,
    pub company_id: Option<i64>,
    pub head: Option<i64>,
}

impl UpdateDepartmentRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.company_id.is_none() && self.head.is_none()
    }
}
