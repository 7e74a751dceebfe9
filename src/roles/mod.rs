//! # Roles Module
//!
//! Named roles that users belong to (employee, manager, admin, ...).
//! Role creation is public so a fresh database can be bootstrapped.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::roles_routes;
pub use services::RolesService;
