//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Password hashing and verification (bcrypt)
//! - Access and refresh token issuance and verification (JWT)
//! - Login and refresh-token rotation
//! - AuthedUser extractor for protected routes

pub mod denylist;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod password;
pub mod routes;
pub mod services;
pub mod tokens;

#[cfg(test)]
mod tests;

pub use extractors::AuthedUser;
pub use routes::auth_routes;
