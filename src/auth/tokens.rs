//! Access and refresh token issuance and verification.
//!
//! Both kinds are HS256 JWTs over the same claim shape but signed with
//! different secrets, so a token of one kind never verifies as the other.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

use super::denylist::{NoDenylist, TokenDenylist};
use super::models::{Claims, Identity, IssuedToken};
use crate::common::{config::AuthConfig, ApiError};

pub const ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60;
pub const REFRESH_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn ttl(self) -> Duration {
        match self {
            TokenKind::Access => Duration::seconds(ACCESS_TOKEN_TTL_SECS),
            TokenKind::Refresh => Duration::seconds(REFRESH_TOKEN_TTL_SECS),
        }
    }

    fn label(self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKeys {
    fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// Issues and verifies tokens. Cheap to clone; keys are shared.
#[derive(Clone)]
pub struct TokenService {
    access: Arc<SigningKeys>,
    refresh: Arc<SigningKeys>,
    denylist: Arc<dyn TokenDenylist>,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_denylist(config, Arc::new(NoDenylist))
    }

    pub fn with_denylist(config: &AuthConfig, denylist: Arc<dyn TokenDenylist>) -> Self {
        Self {
            access: Arc::new(SigningKeys::from_secret(&config.access_token_secret)),
            refresh: Arc::new(SigningKeys::from_secret(&config.refresh_token_secret)),
            denylist,
        }
    }

    pub fn issue_access(&self, identity: &Identity) -> Result<IssuedToken, ApiError> {
        self.issue_at(TokenKind::Access, identity, Utc::now())
    }

    pub fn issue_refresh(&self, identity: &Identity) -> Result<IssuedToken, ApiError> {
        self.issue_at(TokenKind::Refresh, identity, Utc::now())
    }

    /// Signs a token as if issued at `now`. `expires_at` and the `exp` claim
    /// are derived from the same instant so they always agree.
    pub fn issue_at(
        &self,
        kind: TokenKind,
        identity: &Identity,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, ApiError> {
        let expires_at = now + kind.ttl();
        let claims = Claims {
            id: identity.id,
            email: identity.email.clone(),
            role: identity.role,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.keys(kind).encoding,
        )
        .map_err(|e| {
            error!(error = %e, user_id = %identity.id, kind = kind.label(), "JWT encoding error");
            ApiError::Internal(format!("failed to sign {} token: {}", kind.label(), e))
        })?;

        Ok(IssuedToken { token, expires_at })
    }

    pub fn verify_access(&self, token: &str) -> Result<Claims, ApiError> {
        self.verify(TokenKind::Access, token)
    }

    pub fn verify_refresh(&self, token: &str) -> Result<Claims, ApiError> {
        self.verify(TokenKind::Refresh, token)
    }

    fn verify(&self, kind: TokenKind, token: &str) -> Result<Claims, ApiError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let decoded = decode::<Claims>(token, &self.keys(kind).decoding, &validation)
            .map_err(|e| classify(kind, e))?;

        if self.denylist.is_revoked(&decoded.claims.jti) {
            debug!(user_id = %decoded.claims.id, kind = kind.label(), "Rejected revoked token");
            return Err(ApiError::AuthenticationRequired);
        }

        Ok(decoded.claims)
    }

    fn keys(&self, kind: TokenKind) -> &SigningKeys {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }
}

/// Bad, forged or stale tokens are the caller's problem; anything else is ours.
fn classify(kind: TokenKind, err: jsonwebtoken::errors::Error) -> ApiError {
    match err.kind() {
        ErrorKind::InvalidToken
        | ErrorKind::InvalidSignature
        | ErrorKind::ExpiredSignature
        | ErrorKind::ImmatureSignature
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::MissingRequiredClaim(_)
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => {
            debug!(error = %err, kind = kind.label(), "Token rejected");
            ApiError::AuthenticationRequired
        }
        _ => ApiError::Internal(format!("{} token verification failed: {}", kind.label(), err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn config() -> AuthConfig {
        AuthConfig {
            access_token_secret: "access-secret".to_string(),
            refresh_token_secret: "refresh-secret".to_string(),
            bcrypt_cost: 4,
        }
    }

    fn alice() -> Identity {
        Identity {
            id: 7,
            email: "alice@x.com".to_string(),
            role: 2,
        }
    }

    struct DenyAll;

    impl TokenDenylist for DenyAll {
        fn is_revoked(&self, _jti: &str) -> bool {
            true
        }
    }

    #[test]
    fn test_access_token_round_trip_carries_identity() {
        let tokens = TokenService::new(&config());
        let issued = tokens.issue_access(&alice()).unwrap();

        let claims = tokens.verify_access(&issued.token).unwrap();
        assert_eq!(claims.identity(), alice());
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_TTL_SECS);
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn test_refresh_token_ttl() {
        let tokens = TokenService::new(&config());
        let issued = tokens.issue_refresh(&alice()).unwrap();

        let claims = tokens.verify_refresh(&issued.token).unwrap();
        assert_eq!(claims.exp - claims.iat, REFRESH_TOKEN_TTL_SECS);
    }

    #[test]
    fn test_kinds_do_not_cross_verify() {
        let tokens = TokenService::new(&config());
        let access = tokens.issue_access(&alice()).unwrap();
        let refresh = tokens.issue_refresh(&alice()).unwrap();

        assert!(matches!(
            tokens.verify_refresh(&access.token),
            Err(ApiError::AuthenticationRequired)
        ));
        assert!(matches!(
            tokens.verify_access(&refresh.token),
            Err(ApiError::AuthenticationRequired)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = TokenService::new(&config());
        let issued_at = Utc::now() - Duration::seconds(ACCESS_TOKEN_TTL_SECS + 5);
        let stale = tokens
            .issue_at(TokenKind::Access, &alice(), issued_at)
            .unwrap();

        assert!(matches!(
            tokens.verify_access(&stale.token),
            Err(ApiError::AuthenticationRequired)
        ));
    }

    #[test]
    fn test_malformed_and_empty_tokens_rejected() {
        let tokens = TokenService::new(&config());
        for garbage in ["", "not-a-jwt", "a.b.c", "eyJhbGciOiJIUzI1NiJ9.e30.xyz"] {
            assert!(
                matches!(tokens.verify_access(garbage), Err(ApiError::AuthenticationRequired)),
                "{:?} should be rejected",
                garbage
            );
        }
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let other = TokenService::new(&AuthConfig {
            access_token_secret: "someone-else".to_string(),
            refresh_token_secret: "someone-else-refresh".to_string(),
            bcrypt_cost: 4,
        });
        let forged = other.issue_refresh(&alice()).unwrap();

        let tokens = TokenService::new(&config());
        assert!(matches!(
            tokens.verify_refresh(&forged.token),
            Err(ApiError::AuthenticationRequired)
        ));
    }

    #[test]
    fn test_every_token_is_unique() {
        let tokens = TokenService::new(&config());
        let issued: HashSet<String> = (0..20)
            .map(|_| tokens.issue_access(&alice()).unwrap().token)
            .collect();
        assert_eq!(issued.len(), 20);
    }

    #[test]
    fn test_denylist_is_consulted() {
        let tokens = TokenService::with_denylist(&config(), Arc::new(DenyAll));
        let issued = tokens.issue_access(&alice()).unwrap();

        assert!(matches!(
            tokens.verify_access(&issued.token),
            Err(ApiError::AuthenticationRequired)
        ));
    }
}
