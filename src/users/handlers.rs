use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use super::models::CreateUserRequest;
use super::services::UsersService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, ApiJson, ApiPath, ApiQuery, PageParams, SharedState};

/// POST /users - Register a user (public)
pub async fn create_user(
    Extension(state): Extension<SharedState>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let users_service = UsersService::new(state.db.clone());

    let user = users_service.create(&state.passwords, request).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users - One page of users
pub async fn get_users(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let cursor = params.into_cursor()?;
    let users_service = UsersService::new(state.db.clone());

    let users = users_service.list(cursor).await?;

    Ok(Json(users))
}

/// GET /users/:id - Get user by ID
pub async fn get_user_by_id(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let users_service = UsersService::new(state.db.clone());

    let user = users_service.get_by_id(user_id).await?;

    Ok(Json(user))
}
