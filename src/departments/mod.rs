//! # Departments Module
//!
//! A department belongs to one company and may name one employee as its
//! head. Deleting the head employee clears the field.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::departments_routes;
pub use services::DepartmentsService;
