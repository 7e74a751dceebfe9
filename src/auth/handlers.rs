//! Authentication handlers

use axum::{body::Bytes, extract::Extension, Json};
use tracing::info;

use super::extractors::AuthedUser;
use super::models::{
    Identity, LoginRequest, LoginResponse, MessageResponse, RefreshTokenRequest,
    TokenPairResponse,
};
use super::services::AuthService;
use crate::common::{ApiError, ApiJson, SharedState};
use crate::users::UsersService;

/// POST /auth/login
/// Exchanges email and password for an access/refresh token pair
///
/// # Request Body
/// ```json
/// { "email": "alice@x.com", "password": "secret1" }
/// ```
///
/// # Response
/// ```json
/// {
///   "user": { "id": 1, "email": "alice@x.com", "role": 1 },
///   "accessToken": "<jwt>",
///   "accessTokenExpiresAt": "2025-01-01T01:00:00Z",
///   "refreshToken": "<jwt>",
///   "refreshTokenExpiresAt": "2025-01-02T00:00:00Z"
/// }
/// ```
pub async fn login(
    Extension(state): Extension<SharedState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let auth = AuthService::new(
        UsersService::new(state.db.clone()),
        &state.tokens,
        &state.passwords,
    );

    let response = auth.login(payload).await?;

    Ok(Json(response))
}

/// POST /auth/refresh-token
/// Trades a refresh token for a brand new pair
///
/// # Request Body
/// ```json
/// { "refreshToken": "<jwt>" }
/// ```
///
/// An empty body counts as a missing token.
pub async fn refresh_token(
    Extension(state): Extension<SharedState>,
    body: Bytes,
) -> Result<Json<TokenPairResponse>, ApiError> {
    let payload = if body.iter().all(u8::is_ascii_whitespace) {
        RefreshTokenRequest::default()
    } else {
        serde_json::from_slice::<RefreshTokenRequest>(&body)
            .map_err(|e| ApiError::MalformedInput(format!("invalid JSON body: {}", e)))?
    };

    let auth = AuthService::new(
        UsersService::new(state.db.clone()),
        &state.tokens,
        &state.passwords,
    );

    let response = auth.refresh(payload.refresh_token.as_deref())?;

    Ok(Json(response))
}

/// GET /auth/me
/// Returns the identity carried by the caller's access token
pub async fn me_handler(authed: AuthedUser) -> Json<Identity> {
    Json(Identity {
        id: authed.id,
        email: authed.email,
        role: authed.role,
    })
}

/// POST /auth/logout
/// Sessions are stateless, so logout only confirms that the client should
/// drop its tokens.
pub async fn logout_handler(authed: AuthedUser) -> Json<MessageResponse> {
    info!(user_id = %authed.id, "User logout successful");
    Json(MessageResponse {
        message: "Logout successful".to_string(),
    })
}
