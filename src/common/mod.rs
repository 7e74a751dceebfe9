// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod extract;
pub mod helpers;
pub mod migrations;
pub mod pagination;
pub mod state;
pub mod validation;

#[cfg(test)]
pub mod test_support;

// Re-export commonly used types for convenience
pub use error::ApiError;
pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use helpers::safe_email_log;
pub use pagination::{Cursor, PageParams};
pub use state::{AppState, SharedState};
pub use validation::{ValidationResult, Validator};
