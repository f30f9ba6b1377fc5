use std::time::Duration;

use relief_core::{AppError, TokenIssuer, parse_expires_in};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_EXPIRES_IN: &str = "1d";

/// Process-wide server settings.
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    jwt_secret: String,
    pub token_ttl: Duration,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// - `JWT_SECRET` (required, non-empty)
    /// - `EXPIRES_IN` (optional, defaults to `1d`)
    /// - `PORT` (optional, defaults to 5000)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::ConfigError("JWT_SECRET must be set".into()))?;

        let token_ttl =
            parse_expires_in(&lookup("EXPIRES_IN").unwrap_or_else(|| DEFAULT_EXPIRES_IN.into()))?;

        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse().map_err(|_| {
                AppError::ConfigError(format!("Invalid PORT '{raw}': must be 0-65535"))
            })?,
        };

        Ok(Self {
            port,
            jwt_secret,
            token_ttl,
        })
    }

    /// Token issuer signing with the configured secret and lifetime.
    pub fn token_issuer(&self) -> TokenIssuer {
        TokenIssuer::new(self.jwt_secret.as_bytes(), self.token_ttl)
    }
}
