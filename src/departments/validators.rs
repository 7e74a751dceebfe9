use super::models::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::common::validation::{check_id, check_min_len};
use crate::common::{ValidationResult, Validator};

pub struct DepartmentValidator;

impl Validator<CreateDepartmentRequest> for DepartmentValidator {
    fn validate(&self, data: &CreateDepartmentRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        check_min_len(&mut result, "name", &data.name, 2);
        check_id(&mut result, "companyId", data.company_id);
        if let Some(head) = data.head {
            check_id(&mut result, "head", head);
        }

        result
    }
}

impl Validator<UpdateDepartmentRequest> for DepartmentValidator {
    fn validate(&self, data: &UpdateDepartmentRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.is_empty() {
            result.add_error("body", "at least one update field is required.");
            return result;
        }

        if let Some(name) = &data.name {
            check_min_len(&mut result, "name", name, 2);
        }
        if let Some(company_id) = data.company_id {
            check_id(&mut result, "companyId", company_id);
        }
        if let Some(head) = data.head {
            check_id(&mut result, "head", head);
        }

        result
    }
}
