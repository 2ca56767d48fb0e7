use crate::helpers::{StubCatalogSource, TestApp};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

fn app() -> TestApp {
    TestApp::with_source(StubCatalogSource::default())
}

#[tokio::test]
async fn it_should_start_unknown_titles_at_zero() {
    let app = app();

    let response = app.get("/api/views/phim-la").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), &json!({"slug": "phim-la", "views": 0}));
}

#[tokio::test]
async fn it_should_count_views_without_a_body() {
    let app = app();

    let response = app.post("/api/views/phim-mot", None).await;
    assert_eq!(response.json()["views"], json!(1));

    let response = app.post("/api/views/phim-mot", None).await;
    assert_eq!(response.json()["views"], json!(2));

    let response = app.get("/api/views/phim-mot").await;
    assert_eq!(response.json()["views"], json!(2));
}

#[tokio::test]
async fn it_should_keep_display_metadata_from_the_body() {
    let app = app();

    app.post(
        "/api/views/phim-mot",
        Some(json!({"name": "Phim Một", "thumb": "phim-mot.jpg"})),
    )
    .await;

    let response = app.get("/api/views?period=all").await;
    assert_eq!(
        response.json()["topViews"],
        json!([{
            "slug": "phim-mot",
            "name": "Phim Một",
            "thumb": "phim-mot.jpg",
            "views": 1
        }])
    );
}

#[tokio::test]
async fn it_should_rank_top_views_within_a_period() {
    let app = app();

    for _ in 0..3 {
        app.post("/api/views/phim-mot", None).await;
    }
    app.post("/api/views/phim-hai", None).await;

    let response = app.get("/api/views?period=day&limit=1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["period"], json!("day"));
    let top = response.json()["topViews"].as_array().unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0]["slug"], json!("phim-mot"));
    assert_eq!(top[0]["views"], json!(3));
}

#[tokio::test]
async fn it_should_fall_back_to_all_time_for_unknown_periods() {
    let app = app();
    app.post("/api/views/phim-mot", None).await;

    let response = app.get("/api/views?period=decade").await;

    assert_eq!(response.json()["period"], json!("all"));
    assert_eq!(response.json()["topViews"].as_array().unwrap().len(), 1);
}
