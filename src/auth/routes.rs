//! Authentication routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `POST /auth/login` - Email/password login
/// - `POST /auth/refresh-token` - Rotate the token pair
/// - `POST /auth/logout` - Logout (client-side token removal)
/// - `GET /auth/me` - Identity of the current access token
pub fn auth_routes() -> Router {
    Router::new()
        .route("/auth/login", post(handlers::login))
        .route("/auth/refresh-token", post(handlers::refresh_token))
        .route("/auth/logout", post(handlers::logout_handler))
        .route("/auth/me", get(handlers::me_handler))
}
