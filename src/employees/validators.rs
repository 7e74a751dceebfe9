use super::models::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::common::validation::{check_id, check_min_len, is_valid_date, is_valid_email};
use crate::common::{ValidationResult, Validator};

pub struct EmployeeValidator;

fn check_email(result: &mut ValidationResult, email: &str) {
    if !is_valid_email(email.trim()) {
        result.add_error("email", "must be a valid email address");
    }
}

fn check_hired_on(result: &mut ValidationResult, hired_on: &str) {
    if !is_valid_date(hired_on.trim()) {
        result.add_error("hiredOn", "must be a date in YYYY-MM-DD format");
    }
}

fn check_not_blank(result: &mut ValidationResult, field: &str, value: &Option<String>) {
    if matches!(value, Some(v) if v.trim().is_empty()) {
        result.add_error(field, "must not be empty");
    }
}

impl Validator<CreateEmployeeRequest> for EmployeeValidator {
    fn validate(&self, data: &CreateEmployeeRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        check_email(&mut result, &data.email);
        check_min_len(&mut result, "name", &data.name, 2);
        check_min_len(&mut result, "designation", &data.designation, 2);
        check_not_blank(&mut result, "mobile", &data.mobile);
        check_not_blank(&mut result, "address", &data.address);
        check_id(&mut result, "companyId", data.company_id);
        check_id(&mut result, "departmentId", data.department_id);
        if let Some(hired_on) = &data.hired_on {
            check_hired_on(&mut result, hired_on);
        }

        result
    }
}

impl Validator<UpdateEmployeeRequest> for EmployeeValidator {
    fn validate(&self, data: &UpdateEmployeeRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.is_empty() {
            result.add_error("body", "at least one update field is required.");
            return result;
        }

        if let Some(email) = &data.email {
            check_email(&mut result, email);
        }
        if let Some(name) = &data.name {
            check_min_len(&mut result, "name", name, 2);
        }
        if let Some(designation) = &data.designation {
            check_min_len(&mut result, "designation", designation, 2);
        }
        check_not_blank(&mut result, "mobile", &data.mobile);
        check_not_blank(&mut result, "address", &data.address);
        if let Some(company_id) = data.company_id {
            check_id(&mut result, "companyId", company_id);
        }
        if let Some(department_id) = data.department_id {
            check_id(&mut result, "departmentId", department_id);
        }
        if let Some(hired_on) = &data.hired_on {
            check_hired_on(&mut result, hired_on);
        }

        result
    }
}
