use super::models::{CreateCompanyRequest, UpdateCompanyRequest};
use super::CompaniesService;
use crate::auth::AuthedUser;
use crate::common::{ApiError, ApiJson, ApiPath, ApiQuery, PageParams, SharedState};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

// ============================================================================
// Company CRUD Handlers
// ============================================================================

/// GET /companies - One page of companies
pub async fn get_companies(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let cursor = params.into_cursor()?;
    let companies_service = CompaniesService::new(state.db.clone());

    let companies = companies_service.list(cursor).await?;

    Ok(Json(companies))
}

/// POST /companies - Create a new company
pub async fn create_company(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiJson(request): ApiJson<CreateCompanyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let companies_service = CompaniesService::new(state.db.clone());

    let company = companies_service.create_company(request).await?;

    Ok((StatusCode::CREATED, Json(company)))
}

/// GET /companies/:id - Get company by ID
pub async fn get_company_by_id(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiPath(company_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let companies_service = CompaniesService::new(state.db.clone());

    let company = companies_service.get_company_by_id(company_id).await?;

    Ok(Json(company))
}

/// PATCH /companies/:id - Update company
pub async fn update_company(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiPath(company_id): ApiPath<i64>,
    ApiJson(request): ApiJson<UpdateCompanyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let companies_service = CompaniesService::new(state.db.clone());

    let company = companies_service.update_company(company_id, request).await?;

    Ok(Json(company))
}

/// DELETE /companies/:id - Delete company
pub async fn delete_company(
    Extension(state): Extension<SharedState>,
    _user: AuthedUser,
    ApiPath(company_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let companies_service = CompaniesService::new(state.db.clone());

    companies_service.delete_company(company_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
