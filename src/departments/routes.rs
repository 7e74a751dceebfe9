use super::handlers;
use axum::{routing::get, Router};

/// Creates the departments router
pub fn departments_routes() -> Router {
    Router::new()
        .route(
            "/departments",
            get(handlers::get_departments).post(handlers::create_department),
        )
        .route(
            "/departments/:id",
            get(handlers::get_department_by_id)
                .patch(handlers::update_department)
                .delete(handlers::delete_department),
        )
}
