// SPDX-License-Identifier: MIT

//! Report collection tests: refresh, status update, delete, and the
//! derived leaderboard.
//!
//! The invariant throughout: local state only changes when the backend
//! accepted the mutation, and never partially.

use civic_sense::models::{LoginPayload, ReportDraft, ReportStatus, Role};
use civic_sense::services::{BackendClient, ReportStore};
use civic_sense::AppError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

fn report_array() -> serde_json::Value {
    serde_json::json!([
        common::report_json("r-1", "Asha", "Flooded underpass", "Validated", 20),
        common::report_json("r-2", "Ben", "Graffiti on wall", "In Review", 10),
    ])
}

#[tokio::test]
async fn refresh_replaces_collection_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(report_array()))
        .mount(&server)
        .await;

    let backend = BackendClient::new(&server.uri());
    let mut store = ReportStore::new();

    store.refresh(&backend).await;

    assert_eq!(store.len(), 2);
    assert_eq!(store.reports()[0].id, "r-1");
    assert_eq!(store.reports()[1].status, ReportStatus::InReview);
}

#[tokio::test]
async fn refresh_failure_leaves_collection_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(report_array()))
        .mount(&server)
        .await;

    let backend = BackendClient::new(&server.uri());
    let mut store = ReportStore::new();
    store.refresh(&backend).await;
    assert_eq!(store.len(), 2);

    // Backend goes away: the next refresh must not wipe the list
    drop(server);
    store.refresh(&backend).await;

    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn refresh_with_malformed_body_leaves_collection_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"not": "an array"})),
        )
        .mount(&server)
        .await;

    let backend = BackendClient::new(&server.uri());
    let mut store = ReportStore::new();
    store.prepend(civic_sense::models::Report::from_draft_local(
        ReportDraft {
            description: "local report".to_string(),
            ..Default::default()
        },
        ReportStatus::Submitted,
        0,
    ));

    store.refresh(&backend).await;

    assert_eq!(store.len(), 1);
    assert_eq!(store.reports()[0].description, "local report");
}

#[tokio::test]
async fn update_status_patches_in_place_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(report_array()))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/reports/r-2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let backend = BackendClient::new(&server.uri());
    let mut store = ReportStore::new();
    store.refresh(&backend).await;

    store
        .update_status(&backend, "r-2", ReportStatus::Validated)
        .await
        .unwrap();

    let updated = store.reports().iter().find(|r| r.id == "r-2").unwrap();
    assert_eq!(updated.status, ReportStatus::Validated);
    // Points are not touched by a status update
    assert_eq!(updated.points_awarded, 10);
    // The other report is untouched
    assert_eq!(
        store.reports().iter().find(|r| r.id == "r-1").unwrap().status,
        ReportStatus::Validated
    );
}

#[tokio::test]
async fn update_status_failure_makes_no_local_change() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(report_array()))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/reports/r-2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let backend = BackendClient::new(&server.uri());
    let mut store = ReportStore::new();
    store.refresh(&backend).await;

    let result = store
        .update_status(&backend, "r-2", ReportStatus::Validated)
        .await;

    assert!(result.is_err());
    assert_eq!(
        store.reports().iter().find(|r| r.id == "r-2").unwrap().status,
        ReportStatus::InReview
    );
}

#[tokio::test]
async fn remove_drops_report_only_after_backend_accepts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(report_array()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/reports/r-1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/reports/r-2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let backend = BackendClient::new(&server.uri());
    let mut store = ReportStore::new();
    store.refresh(&backend).await;

    store.remove(&backend, "r-1").await.unwrap();
    assert_eq!(store.len(), 1);
    assert!(store.reports().iter().all(|r| r.id != "r-1"));

    let rejected = store.remove(&backend, "r-2").await;
    assert!(rejected.is_err());
    assert_eq!(store.len(), 1, "rejected delete must not change state");
}

#[tokio::test]
async fn leaderboard_follows_refreshed_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            common::report_json("r-1", "Asha", "Flooded underpass", "Validated", 20),
            common::report_json("r-2", "Asha", "Pothole", "In Review", 10),
            common::report_json("r-3", "Ben", "lol fake", "Rejected", -25),
        ])))
        .mount(&server)
        .await;

    let backend = BackendClient::new(&server.uri());
    let mut store = ReportStore::new();
    store.refresh(&backend).await;

    let entries = store.leaderboard();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "Asha");
    assert_eq!(entries[0].total_points, 30);
    assert_eq!(entries[0].report_count, 2);
    assert_eq!(entries[1].total_points, -25);
}

#[tokio::test]
async fn dashboard_mutations_require_municipal_role() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Asha", "email": "asha@example.com", "role": "citizen", "points": 5
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut app = common::app_with_backend(&server.uri(), dir.path());

    // Signed out: denied
    let denied = app.update_report_status("r-1", ReportStatus::Validated).await;
    assert!(matches!(denied, Err(AppError::Unauthorized)));

    // Citizen session: still denied
    app.login(LoginPayload {
        name: Some("Asha".to_string()),
        email: None,
        role: Role::Citizen,
        points: None,
        token: "tok-1".to_string(),
    })
    .await
    .unwrap();

    let denied = app.delete_report("r-1").await;
    assert!(matches!(denied, Err(AppError::Unauthorized)));
}
