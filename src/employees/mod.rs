//! # Employees Module
//!
//! Employees belong to a company and a department and move through a
//! hiring status (`application_received` by default).

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::employees_routes;
pub use services::EmployeesService;
