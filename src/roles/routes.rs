use super::handlers;
use axum::{routing::get, Router};

/// Creates the roles router
pub fn roles_routes() -> Router {
    Router::new()
        .route("/roles", get(handlers::get_roles).post(handlers::create_role))
        .route(
            "/roles/:id",
            get(handlers::get_role_by_id)
                .patch(handlers::update_role)
                .delete(handlers::delete_role),
        )
}
