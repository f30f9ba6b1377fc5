use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Collection, Document, InsertResult, contains_nul, without_id};
use crate::traits::DocumentStore;

/// CRUD over one document collection.
///
/// Supplies and testimonials share this implementation; the HTTP layer
/// decides which operations each collection exposes.
#[derive(Clone)]
pub struct ResourceService<S: DocumentStore> {
    store: S,
    collection: Collection,
}

impl<S: DocumentStore> ResourceService<S> {
    pub fn new(store: S, collection: Collection) -> Self {
        Self { store, collection }
    }

    /// Persist a document verbatim under a freshly generated identifier.
    pub async fn create(&self, document: Document) -> Result<InsertResult, AppError> {
        let inserted_id = self
            .store
            .insert(self.collection, storable(document)?)
            .await?;

        tracing::debug!(collection = %self.collection, %inserted_id, "Document created");
        Ok(InsertResult {
            acknowledged: true,
            inserted_id,
        })
    }

    pub async fn list_all(&self) -> Result<Vec<Document>, AppError> {
        self.store.find_all(self.collection).await
    }

    /// Fetch one document. The identifier is validated before any store call.
    pub async fn get_one(&self, id: &str) -> Result<Document, AppError> {
        let id = self.parse_id(id)?;
        self.store
            .find_by_id(self.collection, id)
            .await?
            .ok_or_else(|| self.not_found())
    }

    /// Shallow-merge `fields` into an existing document.
    ///
    /// Keys present in `fields` overwrite, all others are kept. The identifier
    /// itself cannot be changed.
    pub async fn update(&self, id: &str, fields: Document) -> Result<Document, AppError> {
        let id = self.parse_id(id)?;
        let updated = self
            .store
            .update_by_id(self.collection, id, storable(fields)?)
            .await?
            .ok_or_else(|| self.not_found())?;

        tracing::debug!(collection = %self.collection, %id, "Document updated");
        Ok(updated)
    }

    /// Remove a document, returning it as confirmation.
    pub async fn delete(&self, id: &str) -> Result<Document, AppError> {
        let id = self.parse_id(id)?;
        let removed = self
            .store
            .delete_by_id(self.collection, id)
            .await?
            .ok_or_else(|| self.not_found())?;

        tracing::debug!(collection = %self.collection, %id, "Document deleted");
        Ok(removed)
    }

    fn parse_id(&self, raw: &str) -> Result<Uuid, AppError> {
        Uuid::parse_str(raw).map_err(|_| {
            AppError::InvalidIdentifier(format!(
                "Invalid {} ID format",
                self.collection.label().to_lowercase()
            ))
        })
    }

    fn not_found(&self) -> AppError {
        AppError::NotFound(format!("{} not found", self.collection.label()))
    }
}

/// Strip the identifier and reject content the document table cannot hold.
fn storable(document: Document) -> Result<Document, AppError> {
    if contains_nul(&document) {
        return Err(AppError::BadRequest(
            "Document fields must not contain NUL characters".into(),
        ));
    }
    Ok(without_id(document))
}
