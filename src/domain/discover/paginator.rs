use crate::domain::catalog::CatalogItem;
use serde::{Deserialize, Serialize};

/// One page sliced out of a filtered collection.
///
/// `current_page` echoes the requested page even when it lies past the
/// end of the collection; callers get an empty `items` slice with the
/// real totals and must handle empty trailing pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    pub items: Vec<CatalogItem>,
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u32,
}

impl PageResult {
    /// The well-formed empty page served when aggregation has nothing
    /// to offer (no matches, or the upstream was unreachable).
    pub fn empty(current_page: u32) -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_pages: 1,
            current_page: current_page.max(1),
        }
    }
}

/// Page count for a collection: `ceil(total / page_size)`, never below 1
/// so an empty collection still renders as a single empty page.
pub fn total_pages(total_items: u64, page_size: u32) -> u64 {
    total_items.div_ceil(page_size as u64).max(1)
}

/// Slice a fixed-size page out of `items`. Pure function of its inputs:
/// `page` is clamped to at least 1 but not to the page count.
pub fn paginate(items: &[CatalogItem], page: u32, page_size: u32) -> PageResult {
    let current_page = page.max(1);
    let start = (current_page as usize - 1).saturating_mul(page_size as usize);
    let end = start.saturating_add(page_size as usize).min(items.len());
    let page_items = items.get(start..end).map(|s| s.to_vec()).unwrap_or_default();

    PageResult {
        items: page_items,
        total_items: items.len() as u64,
        total_pages: total_pages(items.len() as u64, page_size),
        current_page,
    }
}
