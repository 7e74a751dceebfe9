use super::models::{CreateRoleRequest, UpdateRoleRequest};
use super::RolesService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, ApiJson, ApiPath, ApiQuery, PageParams, SharedState};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

/// GET /roles - One page of roles
pub async fn get_roles(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let cursor = params.into_cursor()?;
    let roles = RolesService::new(state.db.clone()).list(cursor).await?;

    Ok(Json(roles))
}

/// POST /roles - Create a role (public, used to bootstrap an empty database)
pub async fn create_role(
    Extension(state): Extension<SharedState>,
    ApiJson(request): ApiJson<CreateRoleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let role = RolesService::new(state.db.clone()).create_role(request).await?;

    Ok((StatusCode::CREATED, Json(role)))
}

/// GET /roles/:id
pub async fn get_role_by_id(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiPath(role_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let role = RolesService::new(state.db.clone()).get_role_by_id(role_id).await?;

    Ok(Json(role))
}

/// PATCH /roles/:id
pub async fn update_role(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiPath(role_id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateRoleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let role = RolesService::new(state.db.clone())
        .update_role(role_id, request)
        .await?;

    Ok(Json(role))
}

/// DELETE /roles/:id
pub async fn delete_role(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiPath(role_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    RolesService::new(state.db.clone()).delete_role(role_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
