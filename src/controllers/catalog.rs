use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::controllers::empty_string_as_none;
use crate::domain::catalog::{CatalogService, CatalogServiceApi, ListResponse};
use crate::error::AppResult;

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub page: Option<u32>,
}

impl PageQuery {
    fn page(&self) -> u32 {
        self.page.unwrap_or(1)
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub page: Option<u32>,
}

pub struct CatalogController {
    catalog_service: Arc<CatalogService>,
}

impl CatalogController {
    pub fn new(catalog_service: Arc<CatalogService>) -> Self {
        Self { catalog_service }
    }

    /// GET /api/movies - Newly updated titles
    pub async fn latest(
        State(controller): State<Arc<CatalogController>>,
        Query(query): Query<PageQuery>,
    ) -> AppResult<Json<ListResponse>> {
        let response = controller.catalog_service.latest(query.page()).await?;
        Ok(Json(response))
    }

    /// GET /api/movies/:slug - Title detail + episodes
    pub async fn detail(
        State(controller): State<Arc<CatalogController>>,
        Path(slug): Path<String>,
    ) -> AppResult<Json<Value>> {
        let response = controller.catalog_service.detail(&slug).await?;
        Ok(Json(response))
    }

    /// GET /api/search?keyword=... - Keyword search
    pub async fn search(
        State(controller): State<Arc<CatalogController>>,
        Query(query): Query<SearchQuery>,
    ) -> AppResult<Json<ListResponse>> {
        let keyword = query.keyword.unwrap_or_default();
        let response = controller
            .catalog_service
            .search(&keyword, query.page.unwrap_or(1))
            .await?;
        Ok(Json(response))
    }

    /// GET /api/categories - Category taxonomy
    pub async fn categories(
        State(controller): State<Arc<CatalogController>>,
    ) -> AppResult<Json<Value>> {
        let response = controller.catalog_service.categories().await?;
        Ok(Json(response))
    }

    /// GET /api/countries - Country taxonomy
    pub async fn countries(
        State(controller): State<Arc<CatalogController>>,
    ) -> AppResult<Json<Value>> {
        let response = controller.catalog_service.countries().await?;
        Ok(Json(response))
    }

    /// GET /api/the-loai/:slug - Titles in one category
    pub async fn by_category(
        State(controller): State<Arc<CatalogController>>,
        Path(slug): Path<String>,
        Query(query): Query<PageQuery>,
    ) -> AppResult<Json<ListResponse>> {
        let response = controller
            .catalog_service
            .by_category(&slug, query.page())
            .await?;
        Ok(Json(response))
    }

    /// GET /api/quoc-gia/:slug - Titles from one country
    pub async fn by_country(
        State(controller): State<Arc<CatalogController>>,
        Path(slug): Path<String>,
        Query(query): Query<PageQuery>,
    ) -> AppResult<Json<ListResponse>> {
        let response = controller
            .catalog_service
            .by_country(&slug, query.page())
            .await?;
        Ok(Json(response))
    }

    /// GET /api/nam-phat-hanh/:year - Titles released in one year
    pub async fn by_year(
        State(controller): State<Arc<CatalogController>>,
        Path(year): Path<i32>,
        Query(query): Query<PageQuery>,
    ) -> AppResult<Json<ListResponse>> {
        let response = controller
            .catalog_service
            .by_year(year, query.page())
            .await?;
        Ok(Json(response))
    }
}
