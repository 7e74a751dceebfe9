// Application state shared across all modules

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::auth::{password::PasswordHasher, tokens::TokenService};

/// Built once at startup and never mutated afterwards; handlers reach it
/// through `Extension<SharedState>`.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub tokens: TokenService,
    pub passwords: PasswordHasher,
}

pub type SharedState = Arc<AppState>;
