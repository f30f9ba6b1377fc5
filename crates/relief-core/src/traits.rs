use std::future::Future;

use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Collection, Document, NewUser, User};

/// Persists and looks up user accounts.
pub trait UserStore: Send + Sync + Clone {
    /// Find the account registered under `email`, if any.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, AppError>> + Send;

    /// Insert a new account. Returns the generated UUID.
    ///
    /// Implementations backed by a uniqueness constraint report a collision
    /// as [`AppError::DuplicateAccount`].
    fn insert(&self, user: NewUser) -> impl Future<Output = Result<Uuid, AppError>> + Send;
}

/// Schema-less document persistence, partitioned by [`Collection`].
///
/// Documents handed out by a store always carry their identifier under
/// [`crate::models::ID_FIELD`]. Documents handed in never do.
pub trait DocumentStore: Send + Sync + Clone {
    /// Persist a document. Returns the generated UUID.
    fn insert(
        &self,
        collection: Collection,
        document: Document,
    ) -> impl Future<Output = Result<Uuid, AppError>> + Send;

    /// Every document in the collection.
    fn find_all(
        &self,
        collection: Collection,
    ) -> impl Future<Output = Result<Vec<Document>, AppError>> + Send;

    fn find_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Document>, AppError>> + Send;

    /// Shallow-merge `fields` into the stored document and return the result.
    fn update_by_id(
        &self,
        collection: Collection,
        id: Uuid,
        fields: Document,
    ) -> impl Future<Output = Result<Option<Document>, AppError>> + Send;

    /// Remove a document and return what was removed.
    fn delete_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Document>, AppError>> + Send;
}
