use std::sync::LazyLock;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::error::AppError;

/// Hash a password using Argon2id with a fresh random salt.
///
/// Returns a PHC string that embeds the algorithm parameters and salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::HashingError(e.to_string()))
}

/// Verify a password against a stored PHC hash.
///
/// A mismatch is `Ok(false)`. An unparseable hash is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AppError::HashingError(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

static PLACEHOLDER_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password("relief-placeholder").unwrap_or_default());

/// A valid Argon2 hash that no user's password is expected to match.
///
/// Verified against when a login names an unknown account, so both failure
/// paths pay for one hash verification.
pub fn placeholder_hash() -> &'static str {
    &PLACEHOLDER_HASH
}
