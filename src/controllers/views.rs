use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::controllers::empty_string_as_none;
use crate::domain::views::{Period, TopViewEntry, ViewsService, ViewsServiceApi};

const DEFAULT_TOP_LIMIT: usize = 10;

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct TopViewsQuery {
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecordViewRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
}

// Response DTOs
#[derive(Debug, Serialize)]
pub struct ViewCountResponse {
    pub slug: String,
    pub views: u64,
}

#[derive(Debug, Serialize)]
pub struct TopViewsResponse {
    pub period: String,
    #[serde(rename = "topViews")]
    pub top_views: Vec<TopViewEntry>,
}

pub struct ViewsController {
    views_service: Arc<ViewsService>,
}

impl ViewsController {
    pub fn new(views_service: Arc<ViewsService>) -> Self {
        Self { views_service }
    }

    /// GET /api/views/:slug - Lifetime view count for one title
    pub async fn get_views(
        State(controller): State<Arc<ViewsController>>,
        Path(slug): Path<String>,
    ) -> Json<ViewCountResponse> {
        let views = controller.views_service.get_count(&slug).await;
        Json(ViewCountResponse { slug, views })
    }

    /// POST /api/views/:slug - Record one view. The body is optional;
    /// when present it refreshes the display metadata.
    pub async fn record_view(
        State(controller): State<Arc<ViewsController>>,
        Path(slug): Path<String>,
        body: Option<Json<RecordViewRequest>>,
    ) -> Json<ViewCountResponse> {
        let request = body.map(|Json(r)| r).unwrap_or_default();
        let views = controller
            .views_service
            .increment(&slug, request.name, request.thumb)
            .await;
        Json(ViewCountResponse { slug, views })
    }

    /// GET /api/views?period=&limit= - Top viewed titles
    pub async fn top_views(
        State(controller): State<Arc<ViewsController>>,
        Query(query): Query<TopViewsQuery>,
    ) -> Json<TopViewsResponse> {
        let period = Period::parse(query.period.as_deref().unwrap_or("all"));
        let limit = query.limit.unwrap_or(DEFAULT_TOP_LIMIT);
        let top_views = controller.views_service.top(period, limit).await;
        Json(TopViewsResponse {
            period: period.as_str().to_string(),
            top_views,
        })
    }
}
