use tokio::task;

use crate::error::AppError;
use crate::models::NewUser;
use crate::password::{hash_password, placeholder_hash, verify_password};
use crate::token::TokenIssuer;
use crate::traits::UserStore;

/// Account registration and login.
///
/// Generic over the credential store so it can run against PostgreSQL in
/// production and an in-memory store in tests.
#[derive(Clone)]
pub struct AuthService<S: UserStore> {
    store: S,
    tokens: TokenIssuer,
}

impl<S: UserStore> AuthService<S> {
    pub fn new(store: S, tokens: TokenIssuer) -> Self {
        Self { store, tokens }
    }

    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    /// Create an account. Fails with [`AppError::DuplicateAccount`] if the
    /// email is taken, without touching the existing record.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), AppError> {
        if self.store.find_by_email(email).await?.is_some() {
            tracing::debug!(email, "Registration rejected: account exists");
            return Err(AppError::DuplicateAccount);
        }

        let password = password.to_owned();
        let password_hash = task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AppError::InternalFailure(format!("Hashing task failed: {e}")))??;

        let id = self
            .store
            .insert(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!(%id, "Registered new account");
        Ok(())
    }

    /// Check credentials and issue a signed access token.
    ///
    /// Unknown email and wrong password both yield
    /// [`AppError::InvalidCredentials`], and both run one hash verification.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self.store.find_by_email(email).await?;

        let password = password.to_owned();
        let stored_hash = match &user {
            Some(user) => user.password_hash.clone(),
            None => placeholder_hash().to_owned(),
        };
        let outcome = task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .map_err(|e| AppError::InternalFailure(format!("Verification task failed: {e}")))?;

        let Some(user) = user else {
            tracing::debug!(email, "Login rejected: unknown account");
            return Err(AppError::InvalidCredentials);
        };
        if !outcome? {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.email)?;
        tracing::info!(id = %user.id, "Login successful");
        Ok(token)
    }
}
