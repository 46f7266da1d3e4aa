//! PostgreSQL slip repository tests
//!
//! These run against a disposable container and need Docker:
//! `cargo test -p infra_db -- --ignored`

use domain_slip::{SlipDraft, SlipError, SlipPort};
use infra_db::{ping, SlipRepository};
use test_utils::{SlipFixtures, TestDatabase};

async fn repository() -> (TestDatabase, SlipRepository) {
    let db = TestDatabase::new()
        .await
        .expect("Failed to create test database");
    let repo = SlipRepository::new(db.pool().clone());
    (db, repo)
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_ping() {
    let (db, _) = repository().await;
    ping(db.pool()).await.expect("ping failed");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_create_then_get_assigns_id_and_timestamps() {
    let (_db, repo) = repository().await;

    repo.create_slip(SlipFixtures::lorem_ipsum()).await.unwrap();
    let slip = repo.get_slip(1).await.unwrap();

    assert_eq!(slip.id, 1);
    assert_eq!(slip.draft(), SlipFixtures::lorem_ipsum());
    assert_eq!(slip.created_at, slip.updated_at);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_get_all_on_empty_table() {
    let (_db, repo) = repository().await;
    assert!(repo.get_all_slips().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_get_all_returns_rows_in_id_order() {
    let (_db, repo) = repository().await;
    for draft in SlipFixtures::drafts() {
        repo.create_slip(draft).await.unwrap();
    }
    repo.create_slip(SlipFixtures::untagged()).await.unwrap();

    let slips = repo.get_all_slips().await.unwrap();
    let ids: Vec<_> = slips.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(slips[2].draft(), SlipFixtures::steam_train());
    assert!(slips[3].tags.is_empty());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_update_replaces_body_and_tags_and_touches_updated_at() {
    let (_db, repo) = repository().await;
    repo.create_slip(SlipFixtures::lorem_ipsum()).await.unwrap();
    let before = repo.get_slip(1).await.unwrap();

    let draft = SlipDraft::new("rewritten", ["z", "y", "x"]);
    repo.update_slip(1, draft.clone()).await.unwrap();
    let after = repo.get_slip(1).await.unwrap();

    assert_eq!(after.id, before.id);
    assert_eq!(after.draft(), draft);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_update_and_delete_of_missing_row_succeed() {
    let (_db, repo) = repository().await;
    assert!(repo.update_slip(404, SlipFixtures::fnord()).await.is_ok());
    assert!(repo.delete_slip(404).await.is_ok());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_delete_then_get_is_not_found() {
    let (_db, repo) = repository().await;
    repo.create_slip(SlipFixtures::fnord()).await.unwrap();
    repo.delete_slip(1).await.unwrap();

    assert_eq!(repo.get_slip(1).await, Err(SlipError::NotFound(1)));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_missing_table_is_a_storage_error() {
    let (db, repo) = repository().await;
    sqlx::query("DROP TABLE slips").execute(db.pool()).await.unwrap();

    assert!(matches!(
        repo.get_all_slips().await,
        Err(SlipError::Storage(_))
    ));
}
