use super::handlers;
use axum::{routing::get, Router};

/// Creates the users router
///
/// # Routes
/// - `POST /users` - Register a user (public)
/// - `GET /users` - Paginated list
/// - `GET /users/:id` - Single user
pub fn users_routes() -> Router {
    Router::new()
        .route("/users", get(handlers::get_users).post(handlers::create_user))
        .route("/users/:id", get(handlers::get_user_by_id))
}
