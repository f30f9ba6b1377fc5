use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A schema-less document: string keys mapped to arbitrary JSON values.
///
/// Supplies and testimonials carry whatever fields the client sends. The only
/// key the system owns is [`ID_FIELD`].
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Key under which a document's system-assigned identifier is exposed.
pub const ID_FIELD: &str = "id";

/// A registered account as held by the credential store.
///
/// Not `Serialize`: the password hash must never leave the server.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// PHC-formatted Argon2 hash
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// DTO for inserting a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// The document collections exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Supplies,
    Testimonials,
}

impl Collection {
    /// Storage key for the collection.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Supplies => "supplies",
            Collection::Testimonials => "testimonials",
        }
    }

    /// Human-readable singular noun, capitalized.
    pub fn label(&self) -> &'static str {
        match self {
            Collection::Supplies => "Supply",
            Collection::Testimonials => "Testimonial",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Acknowledgement returned after a document is created.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: Uuid,
}

/// Expose a stored body to callers with its identifier attached.
pub fn with_id(id: Uuid, mut body: Document) -> Document {
    body.insert(
        ID_FIELD.to_string(),
        serde_json::Value::String(id.to_string()),
    );
    body
}

/// Drop any client-supplied identifier; ids are assigned by the store.
pub fn without_id(mut document: Document) -> Document {
    document.remove(ID_FIELD);
    document
}

/// True if any key or string value holds U+0000, which PostgreSQL `jsonb`
/// cannot store.
pub fn contains_nul(document: &Document) -> bool {
    fn value_has_nul(value: &serde_json::Value) -> bool {
        match value {
            serde_json::Value::String(s) => s.contains('\0'),
            serde_json::Value::Array(items) => items.iter().any(value_has_nul),
            serde_json::Value::Object(map) => contains_nul(map),
            _ => false,
        }
    }

    document
        .iter()
        .any(|(key, value)| key.contains('\0') || value_has_nul(value))
}
