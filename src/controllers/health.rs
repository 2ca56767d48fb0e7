use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::views::{ViewsService, ViewsServiceApi};
use crate::infrastructure::config::Config;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(
    State((config, views_service)): State<(Arc<Config>, Arc<ViewsService>)>,
) -> impl IntoResponse {
    let tracked = views_service.tracked().await;
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "upstream": config.upstream_base_url,
            "trackedTitles": tracked
        })),
    )
}
