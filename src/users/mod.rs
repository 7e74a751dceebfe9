//! # Users Module
//!
//! Login accounts. Each user holds a bcrypt password hash and belongs to one
//! role. Creation is public so the first account can be bootstrapped.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::users_routes;
pub use services::UsersService;
