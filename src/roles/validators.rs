use super::models::{CreateRoleRequest, UpdateRoleRequest};
use crate::common::validation::check_min_len;
use crate::common::{ValidationResult, Validator};

pub struct RoleValidator;

/// Role names are letters and spaces only, at least two characters.
fn check_name(result: &mut ValidationResult, name: &str) {
    check_min_len(result, "name", name, 2);
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        result.add_error("name", "may only contain letters and spaces");
    }
}

impl Validator<CreateRoleRequest> for RoleValidator {
    fn validate(&self, data: &CreateRoleRequest) -> ValidationResult {
        let mut result = ValidationResult::new();
        check_name(&mut result, &data.name);
        result
    }
}

impl Validator<UpdateRoleRequest> for RoleValidator {
    fn validate(&self, data: &UpdateRoleRequest) -> ValidationResult {
        let mut result = ValidationResult::new();
        match &data.name {
            Some(name) => check_name(&mut result, name),
            None => result.add_error("body", "at least one update field is required."),
        }
        result
    }
}
