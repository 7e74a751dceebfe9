// Common validation types and traits

use chrono::NaiveDate;

use super::error::ApiError;

#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    /// Turns a failed result into `ApiError::Validation`.
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(ApiError::from(self))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}

/// Loose shape check: one `@`, a non-empty local part and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    }
}

/// Dates travel as `YYYY-MM-DD`.
pub fn is_valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

pub fn check_min_len(result: &mut ValidationResult, field: &str, value: &str, min: usize) {
    if value.trim().chars().count() < min {
        result.add_error(field, &format!("must be at least {} characters", min));
    }
}

pub fn check_id(result: &mut ValidationResult, field: &str, id: i64) {
    if id < 1 {
        result.add_error(field, "must be a positive id");
    }
}
