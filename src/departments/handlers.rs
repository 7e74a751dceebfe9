use super::models::{CreateDepartmentRequest, UpdateDepartmentRequest};
use super::DepartmentsService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, ApiJson, ApiPath, ApiQuery, PageParams, SharedState};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

/// GET /departments - One page of departments
pub async fn get_departments(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let cursor = params.into_cursor()?;
    let departments = DepartmentsService::new(state.db.clone()).list(cursor).await?;

    Ok(Json(departments))
}

/// POST /departments
pub async fn create_department(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiJson(request): ApiJson<CreateDepartmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let department = DepartmentsService::new(state.db.clone())
        .create_department(request)
        .await?;

    Ok((StatusCode::CREATED, Json(department)))
}

/// GET /departments/:id
pub async fn get_department_by_id(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiPath(department_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let department = DepartmentsService::new(state.db.clone())
        .get_department_by_id(department_id)
        .await?;

    Ok(Json(department))
}

/// PATCH /departments/:id
pub async fn update_department(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiPath(department_id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateDepartmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let department = DepartmentsService::new(state.db.clone())
        .update_department(department_id, request)
        .await?;

    Ok(Json(department))
}

/// DELETE /departments/:id
pub async fn delete_department(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiPath(department_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    DepartmentsService::new(state.db.clone())
        .delete_department(department_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
