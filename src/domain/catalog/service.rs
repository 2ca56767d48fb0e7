use super::error::CatalogServiceError;
use super::{ListResponse, Pagination, PAGE_SIZE};
use crate::domain::discover::paginator;
use crate::infrastructure::upstream::{CatalogSource, Listing, ListingPage};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Thin passthrough over the upstream catalog. Each operation maps to a
/// single upstream request; the only local work is re-deriving the
/// pagination block so that every list endpoint reports the same
/// 25-per-page contract regardless of what the upstream reports.
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    async fn list(&self, listing: Listing, page: u32) -> Result<ListResponse, CatalogServiceError> {
        let page = page.max(1);
        let fetched = self
            .source
            .list(&listing, page, PAGE_SIZE)
            .await
            .map_err(|e| CatalogServiceError::Upstream(e.to_string()))?;
        Ok(to_list_response(fetched, page))
    }
}

#[async_trait]
pub trait CatalogServiceApi: Send + Sync {
    /// Most recently updated titles.
    async fn latest(&self, page: u32) -> Result<ListResponse, CatalogServiceError>;

    async fn by_category(&self, slug: &str, page: u32)
        -> Result<ListResponse, CatalogServiceError>;

    async fn by_country(&self, slug: &str, page: u32) -> Result<ListResponse, CatalogServiceError>;

    async fn by_year(&self, year: i32, page: u32) -> Result<ListResponse, CatalogServiceError>;

    /// Keyword search. The keyword must be non-empty.
    async fn search(&self, keyword: &str, page: u32) -> Result<ListResponse, CatalogServiceError>;

    /// Title detail + episodes, passed through unmodified.
    async fn detail(&self, slug: &str) -> Result<Value, CatalogServiceError>;

    async fn categories(&self) -> Result<Value, CatalogServiceError>;

    async fn countries(&self) -> Result<Value, CatalogServiceError>;
}

#[async_trait]
impl CatalogServiceApi for CatalogService {
    async fn latest(&self, page: u32) -> Result<ListResponse, CatalogServiceError> {
        self.list(Listing::Latest, page).await
    }

    async fn by_category(
        &self,
        slug: &str,
        page: u32,
    ) -> Result<ListResponse, CatalogServiceError> {
        self.list(Listing::Category(slug.to_string()), page).await
    }

    async fn by_country(&self, slug: &str, page: u32) -> Result<ListResponse, CatalogServiceError> {
        self.list(Listing::Country(slug.to_string()), page).await
    }

    async fn by_year(&self, year: i32, page: u32) -> Result<ListResponse, CatalogServiceError> {
        self.list(Listing::Year(year), page).await
    }

    async fn search(&self, keyword: &str, page: u32) -> Result<ListResponse, CatalogServiceError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(CatalogServiceError::Invalid(
                "Keyword is required".to_string(),
            ));
        }

        let page = page.max(1);
        let fetched = self
            .source
            .search(keyword, page, PAGE_SIZE)
            .await
            .map_err(|e| CatalogServiceError::Upstream(e.to_string()))?;
        Ok(to_list_response(fetched, page))
    }

    async fn detail(&self, slug: &str) -> Result<Value, CatalogServiceError> {
        self.source
            .detail(slug)
            .await
            .map_err(|e| CatalogServiceError::Upstream(e.to_string()))
    }

    async fn categories(&self) -> Result<Value, CatalogServiceError> {
        self.source
            .categories()
            .await
            .map_err(|e| CatalogServiceError::Upstream(e.to_string()))
    }

    async fn countries(&self) -> Result<Value, CatalogServiceError> {
        self.source
            .countries()
            .await
            .map_err(|e| CatalogServiceError::Upstream(e.to_string()))
    }
}

/// The upstream reports totals for its own page size; recompute the page
/// count against the public page size so pagination stays consistent
/// across passthrough and aggregated responses.
fn to_list_response(fetched: ListingPage, current_page: u32) -> ListResponse {
    ListResponse {
        pagination: Pagination {
            total_items: fetched.total_items,
            total_pages: paginator::total_pages(fetched.total_items, PAGE_SIZE),
            current_page,
            page_size: PAGE_SIZE,
        },
        items: fetched.items,
    }
}
