//! Password hashing and verification.
//!
//! bcrypt is deliberately slow, so both directions run on tokio's blocking
//! pool rather than on the request's worker thread.

use std::sync::Arc;
use tokio::task;

use crate::common::ApiError;

/// bcrypt ignores everything past this many bytes of input.
pub const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    /// Hash of a random string at the configured cost. Unknown-email logins
    /// are checked against it so they take as long as real ones.
    decoy_hash: Arc<str>,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Result<Self, bcrypt::BcryptError> {
        let decoy_hash = bcrypt::hash(uuid::Uuid::new_v4().to_string(), cost)?;
        Ok(Self {
            cost,
            decoy_hash: Arc::from(decoy_hash),
        })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub async fn hash(&self, plain: String) -> Result<String, ApiError> {
        let cost = self.cost;
        task::spawn_blocking(move || bcrypt::hash(plain, cost))
            .await
            .map_err(|e| ApiError::Internal(format!("password hashing task failed: {}", e)))?
            .map_err(|e| ApiError::Internal(format!("password hashing failed: {}", e)))
    }

    pub async fn verify(&self, plain: String, hash: String) -> Result<bool, ApiError> {
        task::spawn_blocking(move || bcrypt::verify(plain, &hash))
            .await
            .map_err(|e| ApiError::Internal(format!("password verification task failed: {}", e)))?
            .map_err(|e| ApiError::Internal(format!("stored password hash is unusable: {}", e)))
    }

    /// Burns one comparison's worth of time. The result is always discarded.
    pub async fn verify_decoy(&self, plain: String) -> Result<(), ApiError> {
        self.verify(plain, self.decoy_hash.to_string()).await.map(|_| ())
    }
}
