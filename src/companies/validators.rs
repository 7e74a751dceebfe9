use super::models::{CreateCompanyRequest, UpdateCompanyRequest};
use crate::common::validation::check_min_len;
use crate::common::{ValidationResult, Validator};

pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 255;

pub struct CompanyValidator;

fn check_name(result: &mut ValidationResult, name: &str) {
    check_min_len(result, "name", name, MIN_NAME_LEN);
    if name.chars().count() > MAX_NAME_LEN {
        result.add_error("name", "Company name must not exceed 255 characters");
    }
}

impl Validator<CreateCompanyRequest> for CompanyValidator {
    fn validate(&self, data: &CreateCompanyRequest) -> ValidationResult {
        let mut result = ValidationResult::new();
        check_name(&mut result, &data.name);
        result
    }
}

impl Validator<UpdateCompanyRequest> for CompanyValidator {
    fn validate(&self, data: &UpdateCompanyRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        match &data.name {
            Some(name) => check_name(&mut result, name),
            None => result.add_error("body", "at least one update field is required."),
        }

        result
    }
}
