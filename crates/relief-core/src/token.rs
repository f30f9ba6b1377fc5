use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account email
    pub sub: String,
    pub email: String,
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Signs and verifies HS256 bearer tokens with a process-wide secret.
///
/// Tokens are not stored anywhere; validity is signature plus expiry.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Issue a token for `email`, expiring `ttl` from now.
    pub fn issue(&self, email: &str) -> Result<String, AppError> {
        let iat = Utc::now().timestamp();
        let ttl = i64::try_from(self.ttl.as_secs())
            .map_err(|_| AppError::TokenError("token lifetime out of range".into()))?;
        let claims = Claims {
            sub: email.to_string(),
            email: email.to_string(),
            iat,
            exp: iat.saturating_add(ttl),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::TokenError(e.to_string()))
    }

    /// Check signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::new(Algorithm::HS256);
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::TokenError(e.to_string()))
    }
}

/// Parse a token lifetime such as `"3600"`, `"30m"`, `"12h"` or `"7d"`.
///
/// A bare number is seconds. Zero is rejected.
pub fn parse_expires_in(raw: &str) -> Result<Duration, AppError> {
    let raw = raw.trim();
    let invalid = || {
        AppError::ConfigError(format!(
            "Invalid token lifetime '{raw}': expected <n>, <n>s, <n>m, <n>h or <n>d"
        ))
    };

    let (digits, unit_secs) = match raw.char_indices().last() {
        Some((idx, 's')) => (&raw[..idx], 1),
        Some((idx, 'm')) => (&raw[..idx], 60),
        Some((idx, 'h')) => (&raw[..idx], 60 * 60),
        Some((idx, 'd')) => (&raw[..idx], 24 * 60 * 60),
        Some(_) => (raw, 1),
        None => return Err(invalid()),
    };

    let amount: u64 = digits.parse().map_err(|_| invalid())?;
    if amount == 0 {
        return Err(AppError::ConfigError(
            "Token lifetime must be greater than zero".into(),
        ));
    }

    amount
        .checked_mul(unit_secs)
        .map(Duration::from_secs)
        .ok_or_else(invalid)
}
