//! Commands against a fully wired runtime backed by a temporary directory.

use ec_core::config::AppConfig;
use ec_core::{ChurchId, FollowupStatus, StatusFilter, VisitorDraft, VisitorId};
use ecclesia_lib::bootstrap::{wire_dependencies, AppRuntime};
use ecclesia_lib::commands::visitors::{
    edit_visitor, finish_followup, list_visitors, register_visitor, set_visitor_archived,
    start_followup, ListVisitorsQuery, VisitorEdits,
};
use tempfile::TempDir;

fn runtime() -> (AppRuntime, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        church_id: "central".to_string(),
        database_path: dir.path().join("db").join("ecclesia.db"),
        settings_path: dir.path().join("settings.json"),
        log_dir: dir.path().join("logs"),
    };
    let deps = wire_dependencies(&config).unwrap();
    (AppRuntime::new(deps, ChurchId::from("central")), dir)
}

fn draft(name: &str, phone: Option<&str>) -> VisitorDraft {
    VisitorDraft {
        name: name.to_string(),
        visit_date: "2025-03-09".to_string(),
        phone: phone.map(str::to_string),
        ..VisitorDraft::default()
    }
}

fn first_page() -> ListVisitorsQuery {
    ListVisitorsQuery {
        page: 1,
        ..ListVisitorsQuery::default()
    }
}

#[tokio::test]
async fn test_register_then_list_sorted_by_name() {
    let (runtime, _dir) = runtime();
    for name in ["bruno", "Ana", "Carlos"] {
        register_visitor(&runtime, draft(name, None)).await.unwrap();
    }

    let page = list_visitors(&runtime, first_page()).await.unwrap();

    let names: Vec<_> = page.items.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "bruno", "Carlos"]);
    assert_eq!(page.summary_line(), "Página 1 de 1 • 3 visitantes");
}

#[tokio::test]
async fn test_list_paginates_with_default_settings() {
    let (runtime, _dir) = runtime();
    for i in 1..=11 {
        register_visitor(&runtime, draft(&format!("Pessoa {i:02}"), None))
            .await
            .unwrap();
    }

    let last = list_visitors(
        &runtime,
        ListVisitorsQuery {
            page: 99,
            ..ListVisitorsQuery::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(last.current_page, 2);
    assert_eq!(last.total_pages, 2);
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.items[0].name, "Pessoa 11");
}

#[tokio::test]
async fn test_search_by_phone_digits() {
    let (runtime, _dir) = runtime();
    register_visitor(&runtime, draft("Ana", Some("(11) 98765-4321")))
        .await
        .unwrap();
    register_visitor(&runtime, draft("Bia", Some("(21) 98765-4321")))
        .await
        .unwrap();

    let page = list_visitors(
        &runtime,
        ListVisitorsQuery {
            search: Some("55 11987".to_string()),
            ..first_page()
        },
    )
    .await
    .unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Ana");
    assert_eq!(page.items[0].phone.as_deref(), Some("5511987654321"));

    // Stored digits carry the country code, the prefix is matched as-is.
    let page = list_visitors(
        &runtime,
        ListVisitorsQuery {
            search: Some("11987".to_string()),
            ..first_page()
        },
    )
    .await
    .unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_archive_moves_visitor_to_archived_list() {
    let (runtime, _dir) = runtime();
    let ana = register_visitor(&runtime, draft("Ana", None)).await.unwrap();
    register_visitor(&runtime, draft("Bia", None)).await.unwrap();

    set_visitor_archived(&runtime, VisitorId::from(ana.id.as_str()), true)
        .await
        .unwrap();

    let active = list_visitors(&runtime, first_page()).await.unwrap();
    assert_eq!(active.total_items, 1);

    let archived = list_visitors(
        &runtime,
        ListVisitorsQuery {
            archived: true,
            ..first_page()
        },
    )
    .await
    .unwrap();
    assert!(archived.show_archived);
    assert_eq!(archived.items[0].name, "Ana");
}

#[tokio::test]
async fn test_followup_lifecycle() {
    let (runtime, _dir) = runtime();
    let ana = register_visitor(&runtime, draft("Ana", Some("11987654321")))
        .await
        .unwrap();
    let id = VisitorId::from(ana.id.as_str());

    let started = start_followup(&runtime, id.clone()).await.unwrap();
    let url = started.whatsapp_url.unwrap();
    assert!(url.starts_with("https://wa.me/5511987654321?text="));

    let in_progress = list_visitors(
        &runtime,
        ListVisitorsQuery {
            status: StatusFilter::Only(FollowupStatus::InProgress),
            ..first_page()
        },
    )
    .await
    .unwrap();
    assert_eq!(in_progress.total_items, 1);

    finish_followup(&runtime, id).await.unwrap();

    let done = list_visitors(
        &runtime,
        ListVisitorsQuery {
            status: StatusFilter::Only(FollowupStatus::Done),
            ..first_page()
        },
    )
    .await
    .unwrap();
    assert_eq!(done.items[0].name, "Ana");
}

#[tokio::test]
async fn test_followup_without_phone_has_no_link() {
    let (runtime, _dir) = runtime();
    let ana = register_visitor(&runtime, draft("Ana", None)).await.unwrap();

    let started = start_followup(&runtime, VisitorId::from(ana.id.as_str()))
        .await
        .unwrap();

    assert_eq!(started.whatsapp_url, None);
    assert_eq!(started.followup_status, FollowupStatus::InProgress);
}

#[tokio::test]
async fn test_edit_keeps_untouched_fields() {
    let (runtime, _dir) = runtime();
    let ana = register_visitor(&runtime, draft("Ana", Some("11987654321")))
        .await
        .unwrap();

    let edited = edit_visitor(
        &runtime,
        VisitorId::from(ana.id.as_str()),
        VisitorEdits {
            name: Some("Ana Paula".to_string()),
            ..VisitorEdits::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(edited.name, "Ana Paula");
    assert_eq!(edited.phone.as_deref(), Some("5511987654321"));
    assert_eq!(edited.visit_date, "2025-03-09");
}

#[tokio::test]
async fn test_register_rejects_blank_name() {
    let (runtime, _dir) = runtime();

    let err = register_visitor(&runtime, draft("   ", None))
        .await
        .unwrap_err();

    assert!(!err.is_empty());
}

#[tokio::test]
async fn test_unknown_visitor_errors() {
    let (runtime, _dir) = runtime();

    assert!(start_followup(&runtime, VisitorId::from("ghost")).await.is_err());
    assert!(set_visitor_archived(&runtime, VisitorId::from("ghost"), true)
        .await
        .is_err());
}
