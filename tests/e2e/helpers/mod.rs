use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;
use uuid::Uuid;

use motphim_backend::controllers::{
    catalog::CatalogController, discover::DiscoverController, views::ViewsController,
};
use motphim_backend::domain::catalog::{CatalogItem, CatalogService};
use motphim_backend::domain::discover::{DiscoverCache, DiscoverService, SystemClock};
use motphim_backend::domain::views::ViewsService;
use motphim_backend::infrastructure::config::{Config, LogFormat};
use motphim_backend::infrastructure::http::build_router;
use motphim_backend::infrastructure::repositories::FileViewRepository;
use motphim_backend::infrastructure::upstream::{
    CatalogSource, Listing, ListingPage, UpstreamError,
};

/// Build a catalog item from the parts the tests care about.
pub fn item(slug: &str, categories: &[&str], countries: &[&str], year: Option<i32>) -> CatalogItem {
    serde_json::from_value(json!({
        "slug": slug,
        "name": slug,
        "year": year,
        "category": categories.iter().map(|c| json!({"slug": c})).collect::<Vec<_>>(),
        "country": countries.iter().map(|c| json!({"slug": c})).collect::<Vec<_>>(),
    }))
    .expect("test item must deserialize")
}

/// Canned upstream with call accounting. Every listing serves the same
/// page set, which is all the black-box tests need.
#[derive(Default)]
pub struct StubCatalogSource {
    pub pages: Vec<Vec<CatalogItem>>,
    pub total_items: u64,
    pub fail_lists: bool,
    list_calls: AtomicUsize,
}

impl StubCatalogSource {
    pub fn with_pages(pages: Vec<Vec<CatalogItem>>) -> Self {
        Self {
            total_items: pages.iter().map(|p| p.len() as u64).sum(),
            pages,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_lists: true,
            ..Default::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for StubCatalogSource {
    async fn list(
        &self,
        _listing: &Listing,
        page: u32,
        _limit: u32,
    ) -> Result<ListingPage, UpstreamError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_lists {
            return Err(UpstreamError::Status(503));
        }
        Ok(ListingPage {
            items: self
                .pages
                .get(page as usize - 1)
                .cloned()
                .unwrap_or_default(),
            total_items: self.total_items,
        })
    }

    async fn search(
        &self,
        keyword: &str,
        _page: u32,
        _limit: u32,
    ) -> Result<ListingPage, UpstreamError> {
        let keyword = keyword.to_lowercase();
        let items: Vec<CatalogItem> = self
            .pages
            .iter()
            .flatten()
            .filter(|i| i.slug.contains(&keyword))
            .cloned()
            .collect();
        Ok(ListingPage {
            total_items: items.len() as u64,
            items,
        })
    }

    async fn detail(&self, slug: &str) -> Result<Value, UpstreamError> {
        Ok(json!({"status": true, "movie": {"slug": slug}, "episodes": []}))
    }

    async fn categories(&self) -> Result<Value, UpstreamError> {
        Ok(json!({"data": {"items": [{"name": "Hành Động", "slug": "hanh-dong"}]}}))
    }

    async fn countries(&self) -> Result<Value, UpstreamError> {
        Ok(json!({"data": {"items": [{"name": "Hàn Quốc", "slug": "han-quoc"}]}}))
    }
}

/// The application wired against a stub upstream and a throwaway views
/// file, driven in-process through the router.
pub struct TestApp {
    router: Router,
    pub source: Arc<StubCatalogSource>,
    pub views_file: PathBuf,
}

impl TestApp {
    pub fn with_source(source: StubCatalogSource) -> Self {
        let views_file = std::env::temp_dir().join(format!("views-test-{}.json", Uuid::new_v4()));
        let config = Arc::new(Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            upstream_base_url: "http://upstream.test".to_string(),
            discover_cache_ttl: Duration::from_secs(300),
            views_file: views_file.clone(),
            views_flush_interval: Duration::from_secs(30),
            log_format: LogFormat::Pretty,
        });

        let source = Arc::new(source);
        let view_repository = Arc::new(FileViewRepository::load(&views_file));

        let catalog_service = Arc::new(CatalogService::new(source.clone()));
        let discover_cache = DiscoverCache::new(config.discover_cache_ttl, Arc::new(SystemClock));
        let discover_service = Arc::new(DiscoverService::new(source.clone(), discover_cache));
        let views_service = Arc::new(ViewsService::new(view_repository));

        let router = build_router(
            config,
            Arc::new(CatalogController::new(catalog_service)),
            Arc::new(DiscoverController::new(discover_service)),
            Arc::new(ViewsController::new(views_service.clone())),
            views_service,
        );

        Self {
            router,
            source,
            views_file,
        }
    }

    pub async fn get(&self, uri: &str) -> ApiResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Option<Value>) -> ApiResponse {
        self.request(Method::POST, uri, body).await
    }

    async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> ApiResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let request = builder.body(body).expect("request must build");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router must respond");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body must collect")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).ok();

        ApiResponse {
            status,
            body,
            raw: bytes.to_vec(),
            headers,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        std::fs::remove_file(&self.views_file).ok();
    }
}

pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
    pub raw: Vec<u8>,
    pub headers: axum::http::HeaderMap,
}

impl ApiResponse {
    pub fn json(&self) -> &Value {
        self.body.as_ref().expect("response body must be JSON")
    }

    pub fn pagination(&self) -> &Value {
        &self.json()["pagination"]
    }

    pub fn item_slugs(&self) -> Vec<String> {
        self.json()["items"]
            .as_array()
            .expect("items must be an array")
            .iter()
            .map(|i| i["slug"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}
