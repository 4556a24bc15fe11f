//! API Integration Tests
//!
//! The store is in-process, so each test spins up its own server with a
//! fresh state and no external services.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Change Log Tests
// ============================================================================

#[tokio::test]
async fn test_record_change() {
    let server = TestServer::start().await.expect("Failed to start server");
    let payload = RecordChangePayload::task_update(Uuid::new_v4(), Uuid::new_v4());

    let response = server.post("/api/v1/change-logs", &payload).await.unwrap();
    let entry: ChangeLogEntryBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(entry.entity_type, "task");
    assert_eq!(entry.operation, "update");
    assert_eq!(entry.entity_id, payload.entity_id.to_string());
    assert_eq!(entry.changes.len(), 1);
}

#[tokio::test]
async fn test_record_empty_update_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");
    let payload = json!({
        "entity_type": "epic",
        "entity_id": Uuid::new_v4(),
        "operation": "update",
        "actor_id": Uuid::new_v4(),
        "changes": []
    });

    let response = server.post("/api/v1/change-logs", &payload).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "EMPTY_CHANGE_SET");
}

#[tokio::test]
async fn test_record_empty_create_allowed() {
    let server = TestServer::start().await.expect("Failed to start server");
    let payload = RecordChangePayload::creation("product_idea", Uuid::new_v4(), Uuid::new_v4());

    let response = server.post("/api/v1/change-logs", &payload).await.unwrap();
    let entry: ChangeLogEntryBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(entry.changes.is_empty());
}

#[tokio::test]
async fn test_change_logs_newest_first() {
    let server = TestServer::start().await.expect("Failed to start server");
    let actor = Uuid::new_v4();

    let first = RecordChangePayload::task_update(Uuid::new_v4(), actor);
    let second = RecordChangePayload::task_update(Uuid::new_v4(), actor);
    server.post("/api/v1/change-logs", &first).await.unwrap();
    server.post("/api/v1/change-logs", &second).await.unwrap();

    let response = server.get("/api/v1/change-logs").await.unwrap();
    let entries: Vec<ChangeLogEntryBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].entity_id, second.entity_id.to_string());
    assert_eq!(entries[1].entity_id, first.entity_id.to_string());
}

#[tokio::test]
async fn test_change_logs_by_entity() {
    let server = TestServer::start().await.expect("Failed to start server");
    let entity_id = Uuid::new_v4();
    let actor = Uuid::new_v4();

    server
        .post(
            "/api/v1/change-logs",
            &RecordChangePayload::task_update(entity_id, actor),
        )
        .await
        .unwrap();
    server
        .post(
            "/api/v1/change-logs",
            &RecordChangePayload::task_update(Uuid::new_v4(), actor),
        )
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v1/change-logs/entity/task/{entity_id}"))
        .await
        .unwrap();
    let entries: Vec<ChangeLogEntryBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].entity_id, entity_id.to_string());

    // Same id under a different entity type matches nothing
    let response = server
        .get(&format!("/api/v1/change-logs/entity/epic/{entity_id}"))
        .await
        .unwrap();
    let entries: Vec<ChangeLogEntryBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_change_logs_by_actor() {
    let server = TestServer::start().await.expect("Failed to start server");
    let actor = Uuid::new_v4();

    server
        .post(
            "/api/v1/change-logs",
            &RecordChangePayload::task_update(Uuid::new_v4(), actor),
        )
        .await
        .unwrap();
    server
        .post(
            "/api/v1/change-logs",
            &RecordChangePayload::task_update(Uuid::new_v4(), Uuid::new_v4()),
        )
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v1/change-logs/actor/{actor}"))
        .await
        .unwrap();
    let entries: Vec<ChangeLogEntryBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].actor_id, actor.to_string());
}

#[tokio::test]
async fn test_change_logs_invalid_entity_type() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get(&format!("/api/v1/change-logs/entity/widget/{}", Uuid::new_v4()))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Status Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_list_statuses_seeds_defaults() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/statuses").await.unwrap();
    let statuses: Vec<StatusBody> = assert_json(response, StatusCode::OK).await.unwrap();

    // 6 product idea + 4 epic + 6 task defaults
    assert_eq!(statuses.len(), 16);
}

#[tokio::test]
async fn test_active_statuses_sorted_by_order() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/statuses/entity/task").await.unwrap();
    let statuses: Vec<StatusBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(statuses.len(), 6);
    assert_eq!(statuses[0].name, "Backlog");
    assert!(statuses.windows(2).all(|w| w[0].order <= w[1].order));
}

#[tokio::test]
async fn test_default_status_for_entity_type() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/statuses/entity/epic/default").await.unwrap();
    let status: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(status.name, "Planning");
    assert!(status.is_default);
}

#[tokio::test]
async fn test_unknown_entity_type_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/statuses/entity/widget").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_create_status() {
    let server = TestServer::start().await.expect("Failed to start server");
    let payload = CreateStatusPayload::unique(35);

    let response = server.post("/api/v1/statuses", &payload).await.unwrap();
    let status: StatusBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(status.name, payload.name);
    assert_eq!(status.order, 35);

    // Not enabled for any entity type until toggled explicitly
    let response = server.get("/api/v1/statuses/entity/task").await.unwrap();
    let active: Vec<StatusBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(active.iter().all(|s| s.id != status.id));
}

#[tokio::test]
async fn test_create_status_validation() {
    let server = TestServer::start().await.expect("Failed to start server");
    let payload = json!({"name": "", "order": 10});

    let response = server.post("/api/v1/statuses", &payload).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_status() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/statuses", &CreateStatusPayload::unique(40))
        .await
        .unwrap();
    let created: StatusBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch(
            &format!("/api/v1/statuses/{}", created.id),
            &json!({"name": "Renamed", "order": 41}),
        )
        .await
        .unwrap();
    let updated: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.order, 41);
    // Untouched fields survive the partial update
    assert_eq!(updated.description, created.description);
}

#[tokio::test]
async fn test_update_unknown_status() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .patch(
            &format!("/api/v1/statuses/{}", Uuid::new_v4()),
            &json!({"name": "Ghost"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_status_cascades() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/statuses").await.unwrap();
    let statuses: Vec<StatusBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let target = &statuses[0];

    let response = server
        .delete(&format!("/api/v1/statuses/{}", target.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get("/api/v1/statuses").await.unwrap();
    let remaining: Vec<StatusBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(remaining.iter().all(|s| s.id != target.id));

    let response = server.get("/api/v1/statuses/configurations").await.unwrap();
    let configs: Vec<StatusConfigurationBody> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(configs.iter().all(|c| c.status_id != target.id));
}

#[tokio::test]
async fn test_delete_unknown_status() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .delete(&format!("/api/v1/statuses/{}", Uuid::new_v4()))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Status Enablement Tests
// ============================================================================

#[tokio::test]
async fn test_set_enabled_upserts() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/statuses", &CreateStatusPayload::unique(45))
        .await
        .unwrap();
    let status: StatusBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/statuses/{}/entity-types/task", status.id);

    let response = server.put(&path, &json!({"enabled": true})).await.unwrap();
    let first: StatusConfigurationBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(first.enabled);

    // Now visible in the active list
    let response = server.get("/api/v1/statuses/entity/task").await.unwrap();
    let active: Vec<StatusBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(active.iter().any(|s| s.id == status.id));

    // Toggling off reuses the same row
    let response = server.put(&path, &json!({"enabled": false})).await.unwrap();
    let second: StatusConfigurationBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second.id, first.id);
    assert!(!second.enabled);

    let response = server.get("/api/v1/statuses/entity/task").await.unwrap();
    let active: Vec<StatusBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(active.iter().all(|s| s.id != status.id));
}

#[tokio::test]
async fn test_disable_default_status_changes_fallback() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/statuses/entity/epic/default").await.unwrap();
    let default: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .put(
            &format!("/api/v1/statuses/{}/entity-types/epic", default.id),
            &json!({"enabled": false}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/api/v1/statuses/entity/epic/default").await.unwrap();
    let fallback: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_ne!(fallback.id, default.id);
}
