use std::collections::HashSet;

use serde_json::json;
use uuid::Uuid;

use relief_core::models::{Collection, Document, ID_FIELD};
use relief_core::traits::DocumentStore;

use crate::integration::common::setup_test_db;

fn doc(value: serde_json::Value) -> Document {
    value.as_object().cloned().expect("object literal")
}

#[tokio::test]
async fn insert_and_find_by_id() {
    let (db, _container) = setup_test_db().await;
    let repo = db.document_repo();

    let id = repo
        .insert(
            Collection::Supplies,
            doc(json!({"title": "Rice", "quantity": 20, "nested": {"kg": 5}})),
        )
        .await
        .unwrap();

    let found = repo
        .find_by_id(Collection::Supplies, id)
        .await
        .unwrap()
        .expect("Should find the document");

    assert_eq!(
        found,
        doc(json!({
            "id": id.to_string(),
            "title": "Rice",
            "quantity": 20,
            "nested": {"kg": 5}
        }))
    );
}

#[tokio::test]
async fn find_by_id_is_scoped_to_collection() {
    let (db, _container) = setup_test_db().await;
    let repo = db.document_repo();

    let id = repo
        .insert(Collection::Testimonials, doc(json!({"quote": "Thanks"})))
        .await
        .unwrap();

    assert!(
        repo.find_by_id(Collection::Supplies, id)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn update_merges_shallowly() {
    let (db, _container) = setup_test_db().await;
    let repo = db.document_repo();

    let id = repo
        .insert(
            Collection::Supplies,
            doc(json!({"location": "X", "quantity": 1, "meta": {"a": 1, "b": 2}})),
        )
        .await
        .unwrap();

    let updated = repo
        .update_by_id(
            Collection::Supplies,
            id,
            doc(json!({"quantity": 5, "meta": {"a": 9}})),
        )
        .await
        .unwrap()
        .expect("Should update");

    assert_eq!(updated["location"], json!("X"));
    assert_eq!(updated["quantity"], json!(5));
    // Nested objects are replaced, not merged.
    assert_eq!(updated["meta"], json!({"a": 9}));
    assert_eq!(updated[ID_FIELD], json!(id.to_string()));
}

#[tokio::test]
async fn update_missing_returns_none() {
    let (db, _container) = setup_test_db().await;

    let updated = db
        .document_repo()
        .update_by_id(Collection::Supplies, Uuid::new_v4(), doc(json!({"a": 1})))
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[tokio::test]
async fn delete_returns_removed_document() {
    let (db, _container) = setup_test_db().await;
    let repo = db.document_repo();

    let id = repo
        .insert(Collection::Supplies, doc(json!({"title": "Tents"})))
        .await
        .unwrap();

    let removed = repo
        .delete_by_id(Collection::Supplies, id)
        .await
        .unwrap()
        .expect("Should delete");
    assert_eq!(removed["title"], json!("Tents"));

    assert!(
        repo.find_by_id(Collection::Supplies, id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        repo.delete_by_id(Collection::Supplies, id)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn find_all_returns_whole_collection() {
    let (db, _container) = setup_test_db().await;
    let repo = db.document_repo();

    let mut ids = HashSet::new();
    for n in 0..4 {
        let id = repo
            .insert(Collection::Supplies, doc(json!({"batch": n})))
            .await
            .unwrap();
        ids.insert(id.to_string());
    }
    repo.insert(Collection::Testimonials, doc(json!({"quote": "Great"})))
        .await
        .unwrap();

    let listed: HashSet<String> = repo
        .find_all(Collection::Supplies)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d[ID_FIELD].as_str().unwrap().to_string())
        .collect();

    assert_eq!(listed, ids);
}
