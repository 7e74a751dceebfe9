use super::models::CreateUserRequest;
use crate::auth::password::MAX_PASSWORD_BYTES;
use crate::common::validation::{check_id, is_valid_email};
use crate::common::{ValidationResult, Validator};

pub const MAX_EMAIL_LEN: usize = 60;
pub const MIN_PASSWORD_LEN: usize = 6;
/// Login accepts at most this many characters, so creation must too.
pub const MAX_PASSWORD_LEN: usize = 50;

pub struct CreateUserValidator;

impl Validator<CreateUserRequest> for CreateUserValidator {
    fn validate(&self, data: &CreateUserRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        let email = data.email.trim();
        if !is_valid_email(email) {
            result.add_error("email", "must be a valid email address");
        } else if email.chars().count() > MAX_EMAIL_LEN {
            result.add_error("email", "must not exceed 60 characters");
        }

        let password_len = data.password.chars().count();
        if password_len < MIN_PASSWORD_LEN {
            result.add_error("password", "must be at least 6 characters");
        } else if password_len > MAX_PASSWORD_LEN {
            result.add_error("password", "must not exceed 50 characters");
        } else if data.password.len() > MAX_PASSWORD_BYTES {
            result.add_error("password", "must not exceed 72 bytes");
        }

        check_id(&mut result, "role", data.role);

        result
    }
}
