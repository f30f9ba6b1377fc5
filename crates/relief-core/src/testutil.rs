//! Test utilities: in-memory implementations of the store traits.
//!
//! Both stores share state through `Arc<Mutex<_>>`, so clones handed to a
//! service stay observable from the test, and both count every call so
//! tests can assert that an operation never reached storage.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Collection, Document, NewUser, User, with_id, without_id};
use crate::traits::{DocumentStore, UserStore};

// ---------------------------------------------------------------------------
// MemoryUserStore
// ---------------------------------------------------------------------------

/// User store that enforces email uniqueness like the database does.
#[derive(Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<Mutex<Vec<User>>>,
    calls: Arc<Mutex<usize>>,
    error: Arc<Mutex<Option<AppError>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose next call fails with `error`.
    pub fn with_error(error: AppError) -> Self {
        let store = Self::default();
        *store.error.lock().unwrap() = Some(error);
        store
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn record_call(&self) -> Result<(), AppError> {
        *self.calls.lock().unwrap() += 1;
        match self.error.lock().unwrap().take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.record_call()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<Uuid, AppError> {
        self.record_call()?;
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::DuplicateAccount);
        }
        let id = Uuid::new_v4();
        users.push(User {
            id,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        });
        Ok(id)
    }
}

// ---------------------------------------------------------------------------
// MemoryDocumentStore
// ---------------------------------------------------------------------------

type StoredDocument = (Collection, Uuid, Document);

/// Document store keeping bodies in insertion order.
#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    documents: Arc<Mutex<Vec<StoredDocument>>>,
    calls: Arc<Mutex<usize>>,
    error: Arc<Mutex<Option<AppError>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose next call fails with `error`.
    pub fn with_error(error: AppError) -> Self {
        let store = Self::default();
        *store.error.lock().unwrap() = Some(error);
        store
    }

    /// Number of trait calls made so far.
    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    /// Number of documents held in `collection`.
    pub fn len(&self, collection: Collection) -> usize {
        self.documents
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _, _)| *c == collection)
            .count()
    }

    fn record_call(&self) -> Result<(), AppError> {
        *self.calls.lock().unwrap() += 1;
        match self.error.lock().unwrap().take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: Collection, document: Document) -> Result<Uuid, AppError> {
        self.record_call()?;
        let id = Uuid::new_v4();
        self.documents
            .lock()
            .unwrap()
            .push((collection, id, without_id(document)));
        Ok(id)
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<Document>, AppError> {
        self.record_call()?;
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _, _)| *c == collection)
            .map(|(_, id, body)| with_id(*id, body.clone()))
            .collect())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Document>, AppError> {
        self.record_call()?;
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .find(|(c, doc_id, _)| *c == collection && *doc_id == id)
            .map(|(_, id, body)| with_id(*id, body.clone())))
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: Uuid,
        fields: Document,
    ) -> Result<Option<Document>, AppError> {
        self.record_call()?;
        let mut documents = self.documents.lock().unwrap();
        let Some((_, _, body)) = documents
            .iter_mut()
            .find(|(c, doc_id, _)| *c == collection && *doc_id == id)
        else {
            return Ok(None);
        };
        body.extend(without_id(fields));
        Ok(Some(with_id(id, body.clone())))
    }

    async fn delete_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Document>, AppError> {
        self.record_call()?;
        let mut documents = self.documents.lock().unwrap();
        let position = documents
            .iter()
            .position(|(c, doc_id, _)| *c == collection && *doc_id == id);
        Ok(position.map(|idx| {
            let (_, id, body) = documents.remove(idx);
            with_id(id, body)
        }))
    }
}
