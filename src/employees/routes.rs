use super::handlers;
use axum::{routing::get, Router};

pub fn employees_routes() -> Router {
    Router::new()
        .route(
            "/employees",
            get(handlers::get_employees).post(handlers::create_employee),
        )
        .route(
            "/employees/:id",
            get(handlers::get_employee_by_id)
                .patch(handlers::update_employee)
                .delete(handlers::delete_employee),
        )
}
