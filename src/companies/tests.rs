//! Tests for companies module

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::test_support::{bearer_for, request, seed_role, seed_user, send, test_app, test_state};
    use crate::common::{ApiError, Cursor, Validator};
    use crate::departments::{models::CreateDepartmentRequest, DepartmentsService};
    use axum::http::{Method, StatusCode};
    use models::{CreateCompanyRequest, UpdateCompanyRequest};
    use serde_json::json;
    use validators::CompanyValidator;

    fn create(name: &str) -> CreateCompanyRequest {
        CreateCompanyRequest {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_company_name_bounds() {
        assert!(CompanyValidator.validate(&create("Acme")).is_valid);
        assert!(!CompanyValidator.validate(&create("A")).is_valid);
        assert!(!CompanyValidator.validate(&create(" A ")).is_valid);
        assert!(!CompanyValidator.validate(&create(&"x".repeat(256))).is_valid);
        assert!(CompanyValidator.validate(&create(&"x".repeat(255))).is_valid);
    }

    #[test]
    fn test_empty_update_rejected() {
        assert!(!CompanyValidator.validate(&UpdateCompanyRequest::default()).is_valid);
    }

    #[tokio::test]
    async fn test_company_crud() {
        let state = test_state().await;
        let service = CompaniesService::new(state.db.clone());

        let acme = service.create_company(create("  Acme  ")).await.unwrap();
        assert_eq!(acme.name, "Acme");
        assert_eq!(acme.created_at, acme.updated_at);

        let renamed = service
            .update_company(
                acme.id,
                UpdateCompanyRequest {
                    name: Some("Acme Corp".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.name, "Acme Corp");
        assert_eq!(renamed.created_at, acme.created_at);

        assert_eq!(service.get_company_by_id(acme.id).await.unwrap(), renamed);

        service.delete_company(acme.id).await.unwrap();
        assert!(matches!(
            service.get_company_by_id(acme.id).await.unwrap_err(),
            ApiError::NotFound(_)
        ));
        assert!(service.list(Cursor::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_company_name_conflicts() {
        let state = test_state().await;
        let service = CompaniesService::new(state.db.clone());
        service.create_company(create("Acme")).await.unwrap();
        let other = service.create_company(create("Globex")).await.unwrap();

        assert!(matches!(
            service.create_company(create("Acme")).await.unwrap_err(),
            ApiError::Conflict(_)
        ));
        let err = service
            .update_company(
                other.id,
                UpdateCompanyRequest {
                    name: Some("Acme".to_string()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_company_with_departments_cannot_be_deleted() {
        let state = test_state().await;
        let service = CompaniesService::new(state.db.clone());
        let acme = service.create_company(create("Acme")).await.unwrap();
        DepartmentsService::new(state.db.clone())
            .create_department(CreateDepartmentRequest {
                name: "Engineering".to_string(),
                company_id: acme.id,
                head: None,
            })
            .await
            .unwrap();

        assert!(matches!(
            service.delete_company(acme.id).await.unwrap_err(),
            ApiError::Conflict(_)
        ));
        assert!(service.get_company_by_id(acme.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_http_company_endpoints() {
        let state = test_state().await;
        let role = seed_role(&state, "Admin").await;
        let user = seed_user(&state, "alice@x.com", "secret1", role.id).await;
        let token = bearer_for(&state, &user);
        let app = test_app(state);

        let (status, created) = send(
            &app,
            request(Method::POST, "/companies", Some(&token), Some(json!({ "name": "Acme" }))),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(created["createdAt"].is_string());
        let uri = format!("/companies/{}", created["id"]);

        let (status, patched) = send(
            &app,
            request(Method::PATCH, &uri, Some(&token), Some(json!({ "name": "Acme Corp" }))),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(patched["name"], "Acme Corp");

        let (status, _) = send(
            &app,
            request(Method::PATCH, &uri, Some(&token), Some(json!({}))),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = send(
            &app,
            request(Method::PATCH, "/companies/999", Some(&token), Some(json!({ "name": "Nope" }))),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, request(Method::DELETE, &uri, Some(&token), None)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, request(Method::DELETE, &uri, Some(&token), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
