//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::{debug, warn};

use super::models::Claims;
use crate::common::{ApiError, SharedState};

/// Authenticated user extractor
///
/// Verifies the bearer access token and exposes its claim. Trust rests on
/// the signature alone: the user row is not re-read per request.
#[derive(Debug, Clone)]
pub struct AuthedUser {
    pub id: i64,
    pub email: String,
    pub role: i64,
}

impl From<Claims> for AuthedUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.id,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Pulls the token out of `Authorization: Bearer <token>`.
pub fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    let header = match parts.headers.get(AUTHORIZATION) {
        Some(value) => value,
        None => {
            warn!("Authentication failed: missing Authorization header");
            return Err(ApiError::AuthenticationRequired);
        }
    };

    let value = header.to_str().map_err(|_| {
        warn!("Authentication failed: non-ASCII Authorization header");
        ApiError::AuthenticationRequired
    })?;

    match value.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => {
            warn!("Authentication failed: Authorization header is not a bearer token");
            Err(ApiError::AuthenticationRequired)
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state): Extension<SharedState> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::Internal("missing app state".to_string()))?;

        let token = bearer_token(parts)?;
        let claims = app_state.tokens.verify_access(token)?;

        debug!(user_id = %claims.id, "User authentication successful via extractor");

        Ok(AuthedUser::from(claims))
    }
}
