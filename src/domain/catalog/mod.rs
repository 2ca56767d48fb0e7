pub mod error;
pub mod model;
pub mod service;

pub use error::CatalogServiceError;
pub use model::{CatalogItem, TaxonomyRef};
pub use service::{CatalogService, CatalogServiceApi};

use crate::domain::discover::paginator::PageResult;
use serde::{Deserialize, Serialize};

/// Items shown per page to the public API consumer, across every list
/// endpoint. Part of the public contract.
pub const PAGE_SIZE: u32 = 25;

/// Pagination block attached to every list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u32,
    pub page_size: u32,
}

/// Response for list endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub items: Vec<CatalogItem>,
    pub pagination: Pagination,
}

impl From<PageResult> for ListResponse {
    fn from(page: PageResult) -> Self {
        Self {
            items: page.items,
            pagination: Pagination {
                total_items: page.total_items,
                total_pages: page.total_pages,
                current_page: page.current_page,
                page_size: PAGE_SIZE,
            },
        }
    }
}
