// src/common/test_support.rs
//! Fixtures shared by the module test suites: an in-memory database, a
//! state with cheap bcrypt, and helpers for driving the full router.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::{str::FromStr, sync::Arc};
use tower::ServiceExt;

use super::config::AuthConfig;
use super::{AppState, SharedState};
use crate::auth::models::Identity;
use crate::auth::{password::PasswordHasher, tokens::TokenService};
use crate::roles::{models::CreateRoleRequest, models::Role, RolesService};
use crate::users::{models::CreateUserRequest, models::User, UsersService};

/// One connection that never closes, otherwise the in-memory database
/// vanishes between queries.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    super::migrations::run_migrations(&pool, false).await.unwrap();
    pool
}

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        access_token_secret: "test-access-secret".to_string(),
        refresh_token_secret: "test-refresh-secret".to_string(),
        bcrypt_cost: 4,
    }
}

pub async fn test_state() -> SharedState {
    let config = test_auth_config();
    Arc::new(AppState {
        db: test_pool().await,
        tokens: TokenService::new(&config),
        passwords: PasswordHasher::new(config.bcrypt_cost).unwrap(),
    })
}

pub fn test_app(state: SharedState) -> Router {
    crate::app_router(state, &["http://localhost:3000".to_string()])
}

pub async fn seed_role(state: &SharedState, name: &str) -> Role {
    RolesService::new(state.db.clone())
        .create_role(CreateRoleRequest {
            name: name.to_string(),
        })
        .await
        .unwrap()
}

pub async fn seed_user(state: &SharedState, email: &str, password: &str, role: i64) -> User {
    UsersService::new(state.db.clone())
        .create(
            &state.passwords,
            CreateUserRequest {
                email: email.to_string(),
                password: password.to_string(),
                role,
            },
        )
        .await
        .unwrap()
}

/// A valid access token for `user`, signed by the state's token service.
pub fn bearer_for(state: &SharedState, user: &User) -> String {
    let identity = Identity {
        id: user.id,
        email: user.email.clone(),
        role: user.role,
    };
    state.tokens.issue_access(&identity).unwrap().token
}

/// Builds a request; `body` is sent as JSON when present.
pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Runs one request through the router. Empty bodies come back as `Null`.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
