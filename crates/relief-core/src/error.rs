use thiserror::Error;

/// Application-wide error types for the relief backend.
#[derive(Error, Debug)]
pub enum AppError {
    /// Registration attempted with an email that already has an account.
    #[error("User already exists")]
    DuplicateAccount,

    /// Unknown email or wrong password. The two cases are deliberately
    /// indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// A document identifier that can never match a stored document.
    #[error("{0}")]
    InvalidIdentifier(String),

    /// Request payload that cannot be accepted as sent.
    #[error("{0}")]
    BadRequest(String),

    /// Well-formed identifier with no matching document.
    #[error("{0}")]
    NotFound(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Password hashing or hash parsing failed.
    #[error("Password hashing error: {0}")]
    HashingError(String),

    /// Token signing or verification failed.
    #[error("Token error: {0}")]
    TokenError(String),

    /// Anything else that should never reach a caller verbatim.
    #[error("Internal failure: {0}")]
    InternalFailure(String),
}

impl AppError {
    /// Returns true for failures whose detail must stay on the server side.
    pub fn is_internal(&self) -> bool {
        !matches!(
            self,
            AppError::DuplicateAccount
                | AppError::InvalidCredentials
                | AppError::InvalidIdentifier(_)
                | AppError::BadRequest(_)
                | AppError::NotFound(_)
        )
    }
}
