//! Revocation hook consulted by token verification.
//!
//! Verification is stateless by default: a signed, unexpired token is
//! trusted for its whole lifetime. Deployments that need revocation plug a
//! store keyed by the token's `jti` in here instead of re-reading the user
//! row on every request.

pub trait TokenDenylist: Send + Sync {
    fn is_revoked(&self, jti: &str) -> bool;
}

/// Never revokes anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDenylist;

impl TokenDenylist for NoDenylist {
    fn is_revoked(&self, _jti: &str) -> bool {
        false
    }
}
