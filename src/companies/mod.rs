//! # Companies Module
//!
//! Top of the organisation tree. Departments and employees both point at a
//! company, so a company cannot be deleted while either still references it.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::companies_routes;
pub use services::CompaniesService;
