//! Login and token refresh.
//!
//! Neither operation writes anything: login reads one user row, refresh
//! reads nothing at all. The session lives only in the tokens the client
//! holds.

use tracing::{info, warn};

use super::models::{Identity, LoginRequest, LoginResponse, TokenPairResponse};
use super::password::{PasswordHasher, MAX_PASSWORD_BYTES};
use super::tokens::TokenService;
use crate::common::{safe_email_log, ApiError, ValidationResult};
use crate::users::UsersService;

pub const MAX_LOGIN_EMAIL_LEN: usize = 60;
pub const MAX_LOGIN_PASSWORD_LEN: usize = 50;

pub struct AuthService<'a> {
    users: UsersService,
    tokens: &'a TokenService,
    passwords: &'a PasswordHasher,
}

impl<'a> AuthService<'a> {
    pub fn new(users: UsersService, tokens: &'a TokenService, passwords: &'a PasswordHasher) -> Self {
        Self {
            users,
            tokens,
            passwords,
        }
    }

    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let mut result = ValidationResult::new();
        if request.email.chars().count() > MAX_LOGIN_EMAIL_LEN {
            result.add_error("email", "must not exceed 60 characters");
        }
        if request.password.chars().count() > MAX_LOGIN_PASSWORD_LEN {
            result.add_error("password", "must not exceed 50 characters");
        } else if request.password.len() > MAX_PASSWORD_BYTES {
            result.add_error("password", "must not exceed 72 bytes");
        }
        result.into_result()?;

        let user = match self.users.find_by_email(&request.email).await? {
            Some(user) => user,
            None => {
                self.passwords.verify_decoy(request.password).await?;
                warn!(email = %safe_email_log(&request.email), "Login failed: unknown email");
                return Err(ApiError::InvalidCredentials);
            }
        };

        let authenticated = self
            .passwords
            .verify(request.password, user.password_hash.clone())
            .await?;

        if !authenticated {
            warn!(user_id = %user.id, "Login failed: password mismatch");
            return Err(ApiError::InvalidCredentials);
        }

        let identity = user.identity();
        let pair = self.issue_pair(&identity)?;

        info!(
            user_id = %identity.id,
            email = %safe_email_log(&identity.email),
            "User login successful"
        );

        Ok(LoginResponse {
            user: identity,
            access_token: pair.access_token,
            access_token_expires_at: pair.access_token_expires_at,
            refresh_token: pair.refresh_token,
            refresh_token_expires_at: pair.refresh_token_expires_at,
        })
    }

    /// Rotates the pair. The presented refresh token stays valid until it
    /// expires; nothing records that it has been used.
    pub fn refresh(&self, refresh_token: Option<&str>) -> Result<TokenPairResponse, ApiError> {
        let refresh_token = match refresh_token.map(str::trim) {
            Some(token) if !token.is_empty() => token,
            _ => return Err(ApiError::AuthenticationRequired),
        };

        let claims = self.tokens.verify_refresh(refresh_token)?;
        let pair = self.issue_pair(&claims.identity())?;

        info!(user_id = %claims.id, "Token pair refreshed");

        Ok(pair)
    }

    fn issue_pair(&self, identity: &Identity) -> Result<TokenPairResponse, ApiError> {
        let access = self.tokens.issue_access(identity)?;
        let refresh = self.tokens.issue_refresh(identity)?;

        Ok(TokenPairResponse {
            access_token: access.token,
            access_token_expires_at: access.expires_at,
            refresh_token: refresh.token,
            refresh_token_expires_at: refresh.expires_at,
        })
    }
}
