//! Visitor repository against a real SQLite file.

use ec_core::ports::{VisitorRepositoryError, VisitorRepositoryPort};
use ec_core::{ChurchId, FollowupStatus, Visitor, VisitorId};
use ec_infra::db::mappers::visitor_mapper::VisitorRowMapper;
use ec_infra::db::pool::init_db_pool;
use ec_infra::db::repositories::DieselVisitorRepository;
use ec_infra::db::DieselSqliteExecutor;
use tempfile::TempDir;

type Repo = DieselVisitorRepository<DieselSqliteExecutor, VisitorRowMapper>;

/// Each pooled connection to `:memory:` would get its own database, so tests
/// use a file in a temp dir instead.
fn repo() -> (Repo, TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = dir.path().join("ecclesia.db");
    let pool = init_db_pool(url.to_str().expect("utf-8 path")).expect("Failed to create test DB pool");
    let repo = DieselVisitorRepository::new(DieselSqliteExecutor::new(pool), VisitorRowMapper);
    (repo, dir)
}

fn church() -> ChurchId {
    ChurchId::from("central")
}

fn visitor(id: &str, name: &str, visit_date: &str) -> Visitor {
    Visitor {
        id: VisitorId::from(id),
        name: name.to_string(),
        visit_date: visit_date.to_string(),
        followup_status: FollowupStatus::Pending,
        phone: Some("5511987654321".to_string()),
        email: Some(format!("{id}@example.com")),
        notes: None,
        is_member: false,
        archived: false,
        created_at_ms: 1_000,
        updated_at_ms: 1_000,
    }
}

#[tokio::test]
async fn test_save_and_find_round_trip() {
    let (repo, _dir) = repo();
    let original = visitor("v1", "José Silva", "2025-03-09");

    repo.save(&church(), &original).await.unwrap();
    let found = repo.find_by_id(&church(), &original.id).await.unwrap();

    assert_eq!(found, Some(original));
}

#[tokio::test]
async fn test_save_overwrites_existing_record() {
    let (repo, _dir) = repo();
    let mut record = visitor("v1", "Maria", "2025-03-09");
    repo.save(&church(), &record).await.unwrap();

    record.name = "Maria Souza".to_string();
    record.email = None;
    record.updated_at_ms = 2_000;
    repo.save(&church(), &record).await.unwrap();

    let found = repo
        .find_by_id(&church(), &record.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "Maria Souza");
    assert_eq!(found.email, None);
    assert_eq!(found.updated_at_ms, 2_000);
}

#[tokio::test]
async fn test_list_partitions_by_archived_and_orders_by_visit_date_desc() {
    let (repo, _dir) = repo();
    repo.save(&church(), &visitor("a", "Ana", "2025-01-05"))
        .await
        .unwrap();
    repo.save(&church(), &visitor("b", "Bruno", "2025-03-01"))
        .await
        .unwrap();
    let mut archived = visitor("c", "Carla", "2025-02-01");
    archived.archived = true;
    repo.save(&church(), &archived).await.unwrap();

    let active = repo.list_by_archived(&church(), false).await.unwrap();
    let names: Vec<_> = active.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Bruno", "Ana"]);

    let archived = repo.list_by_archived(&church(), true).await.unwrap();
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].name, "Carla");
}

#[tokio::test]
async fn test_records_are_scoped_by_church() {
    let (repo, _dir) = repo();
    repo.save(&church(), &visitor("v1", "Ana", "2025-01-05"))
        .await
        .unwrap();
    let other = ChurchId::from("bairro");

    assert!(repo.list_by_archived(&other, false).await.unwrap().is_empty());
    assert!(repo
        .find_by_id(&other, &VisitorId::from("v1"))
        .await
        .unwrap()
        .is_none());
    assert!(matches!(
        repo.set_archived(&other, &VisitorId::from("v1"), true, 5)
            .await,
        Err(VisitorRepositoryError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_set_archived_moves_between_partitions() {
    let (repo, _dir) = repo();
    repo.save(&church(), &visitor("v1", "Ana", "2025-01-05"))
        .await
        .unwrap();

    repo.set_archived(&church(), &VisitorId::from("v1"), true, 3_000)
        .await
        .unwrap();

    assert!(repo.list_by_archived(&church(), false).await.unwrap().is_empty());
    let archived = repo.list_by_archived(&church(), true).await.unwrap();
    assert_eq!(archived[0].updated_at_ms, 3_000);
}

#[tokio::test]
async fn test_set_followup_status() {
    let (repo, _dir) = repo();
    repo.save(&church(), &visitor("v1", "Ana", "2025-01-05"))
        .await
        .unwrap();

    repo.set_followup_status(&church(), &VisitorId::from("v1"), FollowupStatus::Done, 4_000)
        .await
        .unwrap();

    let found = repo
        .find_by_id(&church(), &VisitorId::from("v1"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.followup_status, FollowupStatus::Done);
    assert_eq!(found.updated_at_ms, 4_000);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let (repo, _dir) = repo();

    let err = repo
        .set_followup_status(&church(), &VisitorId::from("ghost"), FollowupStatus::Done, 1)
        .await
        .unwrap_err();

    assert!(matches!(err, VisitorRepositoryError::NotFound(id) if id == "ghost"));
}
