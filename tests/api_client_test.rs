//! InspectionClient against a local HTTP server

mod common;

use carhub_cli::api::{ApiError, InspectionApi, InspectionClient};
use carhub_cli::checklist;
use carhub_cli::inspection::{CenterInfo, FormRecord, WireRecord, transform};
use serde_json::json;

fn payload() -> WireRecord {
    let mut draft = FormRecord::blank(checklist::builtin(), &CenterInfo::default());
    draft.client_name = "Noura".to_string();
    draft.plate_number = "KSA 4455".to_string();
    draft.toggle_item("engine", "eng-1");
    transform(&draft, checklist::builtin())
}

/// Create posts the payload as JSON and unwraps the `data` envelope
#[tokio::test]
async fn test_create_posts_payload() {
    let (base_url, server) = common::serve(vec![(
        201,
        r#"{"success":true,"data":{"customer":{"name":"Noura"},"inspection":{"id":"a1b2c3d4-0000","createdAt":"2025-10-25T10:00:00Z"}}}"#,
    )])
    .await;

    let client = InspectionClient::new(Some(base_url));
    let record = payload();
    let created = client.create_inspection(&record).await.unwrap();
    assert_eq!(created.id(), Some("a1b2c3d4-0000"));
    assert_eq!(created.customer.name, "Noura");

    let requests = server.await.unwrap();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/inspection/create");
    assert_eq!(requests[0].json(), serde_json::to_value(&record).unwrap());
    assert_eq!(requests[0].json()["inspection"]["findings"], json!({"engine": ["Oil leak"]}));
}

/// A bare record is accepted as the create response
#[tokio::test]
async fn test_create_accepts_bare_record() {
    let (base_url, server) = common::serve(vec![(200, r#"{"inspection":{"id":"bare-1"}}"#)]).await;

    let created = InspectionClient::new(Some(base_url)).create_inspection(&payload()).await.unwrap();
    assert_eq!(created.id(), Some("bare-1"));
    server.await.unwrap();
}

/// The server's message reaches the caller
#[tokio::test]
async fn test_server_error_message_is_surfaced() {
    let (base_url, server) = common::serve(vec![(500, r#"{"message":"db unavailable"}"#)]).await;

    let err = InspectionClient::new(Some(base_url))
        .create_inspection(&payload())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("db unavailable"));
    assert!(matches!(err, ApiError::Server { status: 500, .. }));
    server.await.unwrap();
}

/// Without a message the status code is reported
#[tokio::test]
async fn test_server_error_without_message() {
    let (base_url, server) = common::serve(vec![(503, "Service Unavailable")]).await;

    let err = InspectionClient::new(Some(base_url)).list_inspections().await.unwrap_err();
    assert_eq!(err.to_string(), "API request failed with status 503");
    server.await.unwrap();
}

/// List trims a trailing slash from the base URL and reads `data`
#[tokio::test]
async fn test_list_inspections() {
    let (base_url, server) = common::serve(vec![(
        200,
        r#"{"success":true,"data":[
            {"customer":{"name":"A"},"inspection":{"id":"1","findings":{"gearbox":["Worn brake pads"]}}},
            {"customer":{"name":"B"},"inspection":{"id":"2"}}
        ]}"#,
    )])
    .await;

    let records = InspectionClient::new(Some(format!("{}/", base_url)))
        .list_inspections()
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].inspection.findings["gearbox"], vec!["Worn brake pads"]);
    assert_eq!(records[1].customer.name, "B");

    let requests = server.await.unwrap();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/inspection");
}

/// A success status with an unreadable body
#[tokio::test]
async fn test_invalid_success_body() {
    let (base_url, server) = common::serve(vec![(200, "<html>maintenance</html>")]).await;

    let err = InspectionClient::new(Some(base_url)).list_inspections().await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
    server.await.unwrap();
}

/// Nothing listening is a transport failure
#[tokio::test]
async fn test_connection_refused() {
    let client = InspectionClient::new(Some(common::closed_port_url().await));
    let err = client.list_inspections().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

/// A missing base URL fails before any request is made
#[tokio::test]
async fn test_missing_base_url() {
    let client = InspectionClient::new(Some(String::new()));
    let err = client.create_inspection(&payload()).await.unwrap_err();
    assert!(matches!(err, ApiError::MissingBaseUrl));
}
