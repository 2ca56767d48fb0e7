use crate::helpers::{StubCatalogSource, TestApp};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn it_should_return_ok_for_health_check() {
    let app = TestApp::with_source(StubCatalogSource::default());

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(String::from_utf8(response.raw.clone()).unwrap(), "OK");
}

#[tokio::test]
async fn it_should_report_readiness_details() {
    let app = TestApp::with_source(StubCatalogSource::default());
    app.post("/api/views/phim-mot", None).await;

    let response = app.get("/health/ready").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], json!("ready"));
    assert_eq!(response.json()["upstream"], json!("http://upstream.test"));
    assert_eq!(response.json()["trackedTitles"], json!(1));
}

#[tokio::test]
async fn it_should_attach_a_request_id_to_every_response() {
    let app = TestApp::with_source(StubCatalogSource::default());

    let response = app.get("/health").await;
    assert!(response.headers.contains_key("x-request-id"));

    let response = app.get("/api/views/phim-mot").await;
    assert!(response.headers.contains_key("x-request-id"));
}
