use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::controllers::empty_string_as_none;
use crate::domain::catalog::ListResponse;
use crate::domain::discover::{DiscoverFilter, DiscoverService, DiscoverServiceApi};

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct DiscoverQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub page: Option<u32>,
}

pub struct DiscoverController {
    discover_service: Arc<DiscoverService>,
}

impl DiscoverController {
    pub fn new(discover_service: Arc<DiscoverService>) -> Self {
        Self { discover_service }
    }

    /// GET /api/discover - Combined multi-dimension filtered listing.
    ///
    /// Never returns an error: the service degrades every upstream
    /// problem to a well-formed empty page.
    pub async fn discover(
        State(controller): State<Arc<DiscoverController>>,
        Query(query): Query<DiscoverQuery>,
    ) -> Json<ListResponse> {
        let filter = DiscoverFilter {
            category: query.category,
            country: query.country,
            year: query.year,
        };
        let page = controller
            .discover_service
            .discover(filter, query.page.unwrap_or(1))
            .await;
        Json(ListResponse::from(page))
    }
}
