use relief_core::AppError;
use relief_core::models::NewUser;
use relief_core::traits::UserStore;

use crate::integration::common::setup_test_db;

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.into(),
        email: email.into(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(),
    }
}

#[tokio::test]
async fn insert_and_find_by_email() {
    let (db, _container) = setup_test_db().await;
    let repo = db.user_repo();

    let id = repo
        .insert(new_user("Ada", "ada@example.com"))
        .await
        .unwrap();
    assert!(!id.is_nil());

    let user = repo
        .find_by_email("ada@example.com")
        .await
        .unwrap()
        .expect("Should find the user");

    assert_eq!(user.id, id);
    assert_eq!(user.name, "Ada");
    assert!(user.password_hash.starts_with("$argon2id$"));
}

#[tokio::test]
async fn find_unknown_email_returns_none() {
    let (db, _container) = setup_test_db().await;

    let user = db.user_repo().find_by_email("nobody@example.com").await.unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn unique_email_constraint_maps_to_duplicate_account() {
    let (db, _container) = setup_test_db().await;
    let repo = db.user_repo();

    repo.insert(new_user("Ada", "ada@example.com"))
        .await
        .unwrap();
    let second = repo.insert(new_user("Other", "ada@example.com")).await;

    assert!(matches!(second, Err(AppError::DuplicateAccount)));
    assert_eq!(repo.count().await.unwrap(), 1);
}
