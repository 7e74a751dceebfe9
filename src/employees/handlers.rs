use super::models::{CreateEmployeeRequest, UpdateEmployeeRequest};
use super::EmployeesService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, ApiJson, ApiPath, ApiQuery, PageParams, SharedState};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

pub async fn get_employees(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let cursor = params.into_cursor()?;
    let employees = EmployeesService::new(state.db.clone()).list(cursor).await?;

    Ok(Json(employees))
}

pub async fn create_employee(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiJson(request): ApiJson<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = EmployeesService::new(state.db.clone())
        .create_employee(request)
        .await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn get_employee_by_id(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiPath(employee_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = EmployeesService::new(state.db.clone())
        .get_employee_by_id(employee_id)
        .await?;

    Ok(Json(employee))
}

pub async fn update_employee(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiPath(employee_id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateEmployeeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = EmployeesService::new(state.db.clone())
        .update_employee(employee_id, request)
        .await?;

    Ok(Json(employee))
}

pub async fn delete_employee(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiPath(employee_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    EmployeesService::new(state.db.clone())
        .delete_employee(employee_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
