pub mod ophim;

pub use ophim::OphimClient;

use crate::domain::catalog::CatalogItem;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Per-request timeout against the upstream catalog. A page fetch that
/// exceeds this is treated as failed by the caller.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(15);

/// A single-dimension listing the upstream catalog can serve directly.
/// The upstream cannot combine dimensions; anything beyond one dimension
/// is assembled client-side by the discover service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Most recently updated titles, no filter applied.
    Latest,
    Category(String),
    Country(String),
    Year(i32),
}

/// One page of a listing as returned by the upstream.
#[derive(Debug, Clone)]
pub struct ListingPage {
    pub items: Vec<CatalogItem>,
    /// Total item count across the whole listing, as reported upstream.
    pub total_items: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("upstream returned malformed payload: {0}")]
    Malformed(String),
}

/// Read-only port over the upstream catalog API.
///
/// Implementations are responsible for endpoint selection, URL encoding
/// and payload decoding. Callers see typed pages and opaque JSON for the
/// passthrough surfaces.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of a single-dimension listing.
    async fn list(
        &self,
        listing: &Listing,
        page: u32,
        limit: u32,
    ) -> Result<ListingPage, UpstreamError>;

    /// Full-text search by keyword.
    async fn search(
        &self,
        keyword: &str,
        page: u32,
        limit: u32,
    ) -> Result<ListingPage, UpstreamError>;

    /// Full detail payload for one title, passed through unmodified.
    async fn detail(&self, slug: &str) -> Result<Value, UpstreamError>;

    /// Category taxonomy, passed through unmodified.
    async fn categories(&self) -> Result<Value, UpstreamError>;

    /// Country taxonomy, passed through unmodified.
    async fn countries(&self) -> Result<Value, UpstreamError>;
}
