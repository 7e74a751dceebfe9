//! Tests for auth module
//!
//! Login and refresh through `AuthService`, then the same flows over HTTP.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::test_support::{
        bearer_for, request, seed_role, seed_user, send, test_app, test_state,
    };
    use crate::common::{ApiError, SharedState};
    use crate::users::UsersService;
    use axum::http::{Method, StatusCode};
    use chrono::{Duration, Utc};
    use models::{Identity, LoginRequest};
    use serde_json::json;
    use services::AuthService;
    use tokens::{TokenKind, TokenService};

    fn auth_service(state: &SharedState) -> AuthService<'_> {
        AuthService::new(
            UsersService::new(state.db.clone()),
            &state.tokens,
            &state.passwords,
        )
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    async fn state_with_alice() -> SharedState {
        let state = test_state().await;
        let role = seed_role(&state, "Admin").await;
        seed_user(&state, "alice@x.com", "secret1", role.id).await;
        state
    }

    // ========================================================================
    // Login
    // ========================================================================

    #[tokio::test]
    async fn test_login_success_returns_verifiable_pair() {
        let state = state_with_alice().await;

        let response = auth_service(&state)
            .login(login_request("alice@x.com", "secret1"))
            .await
            .unwrap();

        assert_eq!(response.user.email, "alice@x.com");

        let access = state.tokens.verify_access(&response.access_token).unwrap();
        let refresh = state.tokens.verify_refresh(&response.refresh_token).unwrap();
        assert_eq!(access.identity(), response.user);
        assert_eq!(refresh.identity(), response.user);
        assert_eq!(access.exp, response.access_token_expires_at.timestamp());
        assert_eq!(refresh.exp, response.refresh_token_expires_at.timestamp());
        assert!(response.refresh_token_expires_at > response.access_token_expires_at);
    }

    #[tokio::test]
    async fn test_login_email_is_case_insensitive() {
        let state = state_with_alice().await;

        let response = auth_service(&state)
            .login(login_request("  ALICE@X.com ", "secret1"))
            .await
            .unwrap();

        assert_eq!(response.user.email, "alice@x.com");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_fail_identically() {
        let state = state_with_alice().await;
        let auth = auth_service(&state);

        let wrong_password = auth
            .login(login_request("alice@x.com", "wrong"))
            .await
            .unwrap_err();
        let unknown_email = auth
            .login(login_request("bob@x.com", "anything"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, ApiError::InvalidCredentials));
        assert!(matches!(unknown_email, ApiError::InvalidCredentials));
        assert_eq!(wrong_password.code(), unknown_email.code());
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_login_rejects_oversized_input() {
        let state = state_with_alice().await;
        let long_password = "x".repeat(51);

        let err = auth_service(&state)
            .login(login_request("alice@x.com", &long_password))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_login_rejects_passwords_bcrypt_would_truncate() {
        let state = test_state().await;
        let role = seed_role(&state, "Admin").await;
        let stored = "😀".repeat(18);
        assert_eq!(stored.len(), 72);
        seed_user(&state, "emoji@x.com", &stored, role.id).await;
        let auth = auth_service(&state);

        let longer = format!("{}y", stored);
        let err = auth
            .login(login_request("emoji@x.com", &longer))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)), "got {:?}", err);

        assert!(auth.login(login_request("emoji@x.com", &stored)).await.is_ok());
    }

    // ========================================================================
    // Refresh
    // ========================================================================

    #[tokio::test]
    async fn test_refresh_issues_new_pair_with_later_expiry() {
        let state = state_with_alice().await;
        let identity = Identity {
            id: 1,
            email: "alice@x.com".to_string(),
            role: 1,
        };
        let earlier = state
            .tokens
            .issue_at(TokenKind::Refresh, &identity, Utc::now() - Duration::seconds(60))
            .unwrap();

        let pair = auth_service(&state).refresh(Some(&earlier.token)).unwrap();

        assert_ne!(pair.refresh_token, earlier.token);
        assert!(pair.refresh_token_expires_at > earlier.expires_at);
        let claims = state.tokens.verify_access(&pair.access_token).unwrap();
        assert_eq!(claims.identity(), identity);
    }

    #[tokio::test]
    async fn test_refresh_does_not_revoke_presented_token() {
        let state = state_with_alice().await;
        let login = auth_service(&state)
            .login(login_request("alice@x.com", "secret1"))
            .await
            .unwrap();
        let auth = auth_service(&state);

        assert!(auth.refresh(Some(&login.refresh_token)).is_ok());
        assert!(auth.refresh(Some(&login.refresh_token)).is_ok());
    }

    #[tokio::test]
    async fn test_refresh_failures_require_authentication() {
        let state = state_with_alice().await;
        let auth = auth_service(&state);
        let identity = Identity {
            id: 1,
            email: "alice@x.com".to_string(),
            role: 1,
        };

        let expired = state
            .tokens
            .issue_at(TokenKind::Refresh, &identity, Utc::now() - Duration::days(2))
            .unwrap()
            .token;
        let access = state.tokens.issue_access(&identity).unwrap().token;
        let foreign = TokenService::new(&crate::common::config::AuthConfig {
            access_token_secret: "other-access".to_string(),
            refresh_token_secret: "other-refresh".to_string(),
            bcrypt_cost: 4,
        })
        .issue_refresh(&identity)
        .unwrap()
        .token;

        for token in [None, Some(""), Some("   "), Some("not.a.jwt"), Some(expired.as_str()),
            Some(access.as_str()), Some(foreign.as_str())]
        {
            let err = auth.refresh(token).unwrap_err();
            assert!(
                matches!(err, ApiError::AuthenticationRequired),
                "token {:?} gave {:?}",
                token,
                err
            );
        }
    }

    // ========================================================================
    // HTTP
    // ========================================================================

    #[tokio::test]
    async fn test_http_login_and_me() {
        let state = state_with_alice().await;
        let app = test_app(state);

        let (status, body) = send(
            &app,
            request(
                Method::POST,
                "/auth/login",
                None,
                Some(json!({ "email": "alice@x.com", "password": "secret1" })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["accessTokenExpiresAt"].is_string());
        let access = body["accessToken"].as_str().unwrap().to_string();

        let (status, me) = send(&app, request(Method::GET, "/auth/me", Some(&access), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["email"], "alice@x.com");

        let (status, body) =
            send(&app, request(Method::POST, "/auth/logout", Some(&access), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Logout successful");
    }

    #[tokio::test]
    async fn test_http_failed_logins_have_identical_bodies() {
        let app = test_app(state_with_alice().await);

        let (wrong_status, wrong_body) = send(
            &app,
            request(
                Method::POST,
                "/auth/login",
                None,
                Some(json!({ "email": "alice@x.com", "password": "wrong1" })),
            ),
        )
        .await;
        let (unknown_status, unknown_body) = send(
            &app,
            request(
                Method::POST,
                "/auth/login",
                None,
                Some(json!({ "email": "bob@x.com", "password": "anything" })),
            ),
        )
        .await;

        assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_body, unknown_body);
        assert_eq!(wrong_body["code"], "invalid-credentials");
    }

    #[tokio::test]
    async fn test_http_refresh_round_trip() {
        let state = state_with_alice().await;
        let app = test_app(state);

        let (_, login) = send(
            &app,
            request(
                Method::POST,
                "/auth/login",
                None,
                Some(json!({ "email": "alice@x.com", "password": "secret1" })),
            ),
        )
        .await;

        let (status, pair) = send(
            &app,
            request(
                Method::POST,
                "/auth/refresh-token",
                None,
                Some(json!({ "refreshToken": login["refreshToken"] })),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_ne!(pair["refreshToken"], login["refreshToken"]);
        assert_ne!(pair["accessToken"], login["accessToken"]);
        assert!(pair.get("user").is_none());
    }

    #[tokio::test]
    async fn test_http_refresh_without_token() {
        let app = test_app(state_with_alice().await);

        let (status, body) = send(
            &app,
            request(Method::POST, "/auth/refresh-token", None, Some(json!({}))),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "authentication-required");
    }

    #[tokio::test]
    async fn test_http_refresh_with_empty_body() {
        let app = test_app(state_with_alice().await);

        let (status, body) =
            send(&app, request(Method::POST, "/auth/refresh-token", None, None)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "authentication-required");
    }

    #[tokio::test]
    async fn test_http_refresh_with_garbage_body() {
        let app = test_app(state_with_alice().await);
        let req = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/auth/refresh-token")
            .body(axum::body::Body::from("refreshToken=abc"))
            .unwrap();

        let (status, body) = send(&app, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "malformed-input");
    }

    #[tokio::test]
    async fn test_http_malformed_login_body() {
        let app = test_app(state_with_alice().await);

        let (status, body) = send(
            &app,
            request(Method::POST, "/auth/login", None, Some(json!({ "email": 5 }))),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "malformed-input");
    }

    #[tokio::test]
    async fn test_protected_routes_require_bearer() {
        let state = state_with_alice().await;
        let user = UsersService::new(state.db.clone()).get_by_id(1).await.unwrap();
        let refresh = state
            .tokens
            .issue_refresh(&Identity {
                id: user.id,
                email: user.email.clone(),
                role: user.role,
            })
            .unwrap()
            .token;
        let app = test_app(state.clone());

        let (status, _) = send(&app, request(Method::GET, "/companies", None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) =
            send(&app, request(Method::GET, "/companies", Some("garbage"), None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        // A refresh token is not an access token
        let (status, _) =
            send(&app, request(Method::GET, "/companies", Some(&refresh), None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let access = bearer_for(&state, &user);
        let (status, _) =
            send(&app, request(Method::GET, "/companies", Some(&access), None)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let app = test_app(test_state().await);

        let (status, body) = send(&app, request(Method::GET, "/health", None, None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "I'm alive!");
    }
}
