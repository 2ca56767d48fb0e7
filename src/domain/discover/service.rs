use super::cache::DiscoverCache;
use super::filter::{DiscoverFilter, DiscoverMode, ResidualFilter};
use super::paginator::{self, PageResult};
use crate::domain::catalog::{CatalogItem, PAGE_SIZE};
use crate::infrastructure::upstream::{CatalogSource, Listing};
use async_trait::async_trait;
use futures::future;
use std::collections::HashSet;
use std::sync::Arc;

/// How many source pages one aggregation refresh fans out over.
pub const MAX_SOURCE_PAGES: u32 = 10;
/// Items requested per source page, larger than the public page size to
/// amortize the fan-out cost.
pub const SOURCE_LIMIT: u32 = 100;

/// Serves the discover endpoint: single-dimension requests pass through
/// to the upstream, multi-dimension requests are answered from a cached
/// corpus assembled by fanning out over one upstream listing and
/// filtering the rest client-side.
pub struct DiscoverService {
    source: Arc<dyn CatalogSource>,
    cache: DiscoverCache,
}

#[async_trait]
pub trait DiscoverServiceApi: Send + Sync {
    /// Resolve one discover request. Never fails: any upstream trouble
    /// degrades to a well-formed empty page.
    async fn discover(&self, filter: DiscoverFilter, page: u32) -> PageResult;
}

impl DiscoverService {
    pub fn new(source: Arc<dyn CatalogSource>, cache: DiscoverCache) -> Self {
        Self { source, cache }
    }

    /// Fan out over the first `MAX_SOURCE_PAGES` pages of `listing`,
    /// concurrently, and concatenate whatever arrives in page order.
    /// A failed page contributes nothing; it degrades completeness, not
    /// the request.
    async fn fetch_corpus(&self, listing: &Listing) -> Vec<CatalogItem> {
        let fetches = (1..=MAX_SOURCE_PAGES).map(|page| {
            let source = Arc::clone(&self.source);
            let listing = listing.clone();
            async move {
                match source.list(&listing, page, SOURCE_LIMIT).await {
                    Ok(fetched) => fetched.items,
                    Err(err) => {
                        tracing::warn!(page, error = %err, "source page fetch failed");
                        Vec::new()
                    }
                }
            }
        });

        future::join_all(fetches)
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    async fn aggregate(
        &self,
        listing: &Listing,
        residual: &ResidualFilter,
        key: String,
    ) -> Arc<Vec<CatalogItem>> {
        if let Some(corpus) = self.cache.get(&key).await {
            tracing::debug!(key = %key, items = corpus.len(), "discover cache hit");
            return corpus;
        }

        let fetched = self.fetch_corpus(listing).await;
        let fetched_count = fetched.len();
        let filtered = merge_dedup_filter(fetched, residual);

        tracing::info!(
            key = %key,
            fetched = fetched_count,
            kept = filtered.len(),
            "discover cache populated"
        );

        self.cache.put(key, filtered).await
    }
}

#[async_trait]
impl DiscoverServiceApi for DiscoverService {
    async fn discover(&self, filter: DiscoverFilter, page: u32) -> PageResult {
        let page = page.max(1);

        match filter.mode() {
            DiscoverMode::Passthrough(listing) => {
                match self.source.list(&listing, page, PAGE_SIZE).await {
                    Ok(fetched) => PageResult {
                        total_pages: paginator::total_pages(fetched.total_items, PAGE_SIZE),
                        total_items: fetched.total_items,
                        current_page: page,
                        items: fetched.items,
                    },
                    Err(err) => {
                        tracing::warn!(listing = ?listing, error = %err, "passthrough listing failed");
                        PageResult::empty(page)
                    }
                }
            }
            DiscoverMode::Aggregate { listing, residual } => {
                let corpus = self.aggregate(&listing, &residual, filter.cache_key()).await;
                paginator::paginate(&corpus, page, PAGE_SIZE)
            }
        }
    }
}

/// Apply the residual predicates, then drop duplicate slugs keeping the
/// first occurrence in fetch order. The surviving order is what makes
/// repeated pagination over one cached corpus deterministic.
fn merge_dedup_filter(items: Vec<CatalogItem>, residual: &ResidualFilter) -> Vec<CatalogItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| residual.matches(item))
        .filter(|item| !item.slug.is_empty() && seen.insert(item.slug.clone()))
        .collect()
}
