// src/main.rs
use axum::{extract::Extension, middleware, routing::get, Json, Router};
use dotenv::dotenv;
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::PathBuf;
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod auth;
mod common;
mod companies;
mod departments;
mod employees;
mod logging_middleware;
mod roles;
mod users;

use auth::{password::PasswordHasher, tokens::TokenService};
use common::config::AppConfig;
use common::{AppState, SharedState};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let config = AppConfig::from_env()?;

    // ========================================================================
    // DATABASE SETUP
    // ========================================================================

    if let Some(path_part) = config.database_url.strip_prefix("sqlite://") {
        let path_without_params = path_part.split('?').next().unwrap_or("");
        if !path_without_params.is_empty() && !path_without_params.starts_with(':') {
            let db_path = PathBuf::from(path_without_params);
            if let Some(parent) = db_path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }
    }

    let connect_options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(connect_options)
        .await?;

    common::migrations::run_migrations(&pool, config.reset_db).await?;

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let tokens = TokenService::new(&config.auth);
    let passwords = PasswordHasher::new(config.auth.bcrypt_cost)?;
    info!(bcrypt_cost = passwords.cost(), "Auth services initialized");

    let shared: SharedState = Arc::new(AppState {
        db: pool,
        tokens,
        passwords,
    });

    let app = app_router(shared, &config.cors_origins);

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

// ============================================================================
// ROUTER COMPOSITION
// ============================================================================

/// Full application router with every layer applied.
pub fn app_router(state: SharedState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(auth::auth_routes())
        .merge(users::users_routes())
        .merge(roles::roles_routes())
        .merge(companies::companies_routes())
        .merge(departments::departments_routes())
        .merge(employees::employees_routes())
        // Request/response bodies at debug level, secrets redacted
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(state))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<Value> {
    Json(json!({ "message": "I'm alive!" }))
}

fn cors_layer(cors_origins: &[String]) -> CorsLayer {
    let origins: Vec<axum::http::HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::DELETE,
            axum::http::Method::PATCH,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
        ])
        .allow_credentials(true)
}
