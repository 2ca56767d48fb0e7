use crate::helpers::{item, StubCatalogSource, TestApp};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

fn app() -> TestApp {
    let mut source = StubCatalogSource::with_pages(vec![vec![
        item("phim-mot", &["hanh-dong"], &["my"], Some(2023)),
        item("phim-hai", &["tinh-cam"], &["han-quoc"], Some(2022)),
    ]]);
    // Pretend the upstream listing is much larger than one page
    source.total_items = 412;
    TestApp::with_source(source)
}

#[tokio::test]
async fn it_should_list_latest_titles_with_public_pagination() {
    let app = app();

    let response = app.get("/api/movies?page=2").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.pagination(),
        &json!({
            "totalItems": 412,
            "totalPages": 17,
            "currentPage": 2,
            "pageSize": 25
        })
    );
}

#[tokio::test]
async fn it_should_list_titles_by_category() {
    let app = app();

    let response = app.get("/api/the-loai/hanh-dong").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.item_slugs(), vec!["phim-mot", "phim-hai"]);
    assert_eq!(app.source.list_calls(), 1);
}

#[tokio::test]
async fn it_should_list_titles_by_year() {
    let app = app();

    let response = app.get("/api/nam-phat-hanh/2023").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.pagination()["totalPages"], json!(17));
}

#[tokio::test]
async fn it_should_search_by_keyword() {
    let app = app();

    let response = app.get("/api/search?keyword=phim-hai").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.item_slugs(), vec!["phim-hai"]);
}

#[tokio::test]
async fn it_should_reject_search_without_a_keyword() {
    let app = app();

    let response = app.get("/api/search").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.get("/api/search?keyword=").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn it_should_pass_detail_payloads_through() {
    let app = app();

    let response = app.get("/api/movies/phim-mot").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["movie"]["slug"], json!("phim-mot"));
}

#[tokio::test]
async fn it_should_pass_taxonomies_through() {
    let app = app();

    let categories = app.get("/api/categories").await;
    assert_eq!(categories.status, StatusCode::OK);
    assert_eq!(
        categories.json()["data"]["items"][0]["slug"],
        json!("hanh-dong")
    );

    let countries = app.get("/api/countries").await;
    assert_eq!(countries.status, StatusCode::OK);
    assert_eq!(
        countries.json()["data"]["items"][0]["slug"],
        json!("han-quoc")
    );
}
