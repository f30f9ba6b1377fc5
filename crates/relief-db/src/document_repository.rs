use sqlx::types::Json;
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

use relief_core::error::AppError;
use relief_core::models::{Collection, Document, with_id, without_id};
use relief_core::traits::DocumentStore;

/// Schema-less document persistence in a single JSONB table.
///
/// Each row belongs to one [`Collection`]. The identifier lives in the `id`
/// column, never inside `body`.
#[derive(Clone)]
pub struct DocumentRepository {
    pool: Pool<Postgres>,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    body: Json<Document>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        with_id(row.id, row.body.0)
    }
}

impl DocumentStore for DocumentRepository {
    async fn insert(&self, collection: Collection, document: Document) -> Result<Uuid, AppError> {
        let row: (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO documents (collection, body)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(collection.as_str())
        .bind(Json(without_id(document)))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.0)
    }

    async fn find_all(&self, collection: Collection) -> Result<Vec<Document>, AppError> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(collection.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Document>, AppError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, body
            FROM documents
            WHERE id = $1 AND collection = $2
            "#,
        )
        .bind(id)
        .bind(collection.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: Uuid,
        fields: Document,
    ) -> Result<Option<Document>, AppError> {
        // `||` on two JSONB objects is a shallow, right-biased merge.
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            UPDATE documents
            SET body = body || $3
            WHERE id = $1 AND collection = $2
            RETURNING id, body
            "#,
        )
        .bind(id)
        .bind(collection.as_str())
        .bind(Json(without_id(fields)))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn delete_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Document>, AppError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            DELETE FROM documents
            WHERE id = $1 AND collection = $2
            RETURNING id, body
            "#,
        )
        .bind(id)
        .bind(collection.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }
}
