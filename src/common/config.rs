// src/common/config.rs
//! Process configuration, read once at startup and passed down explicitly.

use std::env;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://hr_api.db";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Secrets and cost factors used by the token and password components.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub access_token_secret: String,
    pub refresh_token_secret: String,
    pub bcrypt_cost: u32,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub reset_db: bool,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url =
            non_empty("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = match non_empty("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let cors_origins = non_empty("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let reset_db = non_empty("RESET_DB")
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let access_token_secret =
            non_empty("JWT_SECRET_KEY").ok_or(ConfigError::Missing("JWT_SECRET_KEY"))?;
        let refresh_token_secret = non_empty("JWT_REFRESH_SECRET_KEY")
            .ok_or(ConfigError::Missing("JWT_REFRESH_SECRET_KEY"))?;

        if access_token_secret == refresh_token_secret {
            return Err(ConfigError::Invalid {
                name: "JWT_REFRESH_SECRET_KEY",
                reason: "must differ from JWT_SECRET_KEY".to_string(),
            });
        }

        let bcrypt_cost = match non_empty("BCRYPT_COST") {
            Some(raw) => {
                let cost = raw.trim().parse::<u32>().map_err(|e| ConfigError::Invalid {
                    name: "BCRYPT_COST",
                    reason: e.to_string(),
                })?;
                if !(4..=31).contains(&cost) {
                    return Err(ConfigError::Invalid {
                        name: "BCRYPT_COST",
                        reason: format!("{} is outside 4..=31", cost),
                    });
                }
                cost
            }
            None => bcrypt::DEFAULT_COST,
        };

        Ok(Self {
            database_url,
            port,
            cors_origins,
            reset_db,
            auth: AuthConfig {
                access_token_secret,
                refresh_token_secret,
                bcrypt_cost,
            },
        })
    }
}
