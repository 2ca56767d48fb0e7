use crate::domain::catalog::CatalogItem;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// How long an aggregated corpus stays servable before the next request
/// triggers a refresh.
pub const DISCOVER_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Time source for TTL checks, injectable so expiry is testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct CacheEntry {
    items: Arc<Vec<CatalogItem>>,
    fetched_at: Instant,
}

/// Keyed store of filtered, deduplicated corpora.
///
/// Entries are only ever replaced wholesale: `put` swaps in a fresh
/// `Arc`'d collection, and readers clone the `Arc` under the read lock,
/// so a reader can never observe a collection mid-replacement. A stale
/// entry is reported as absent and left in place until the next `put`
/// overwrites it; concurrent refreshes of one key race benignly with
/// last-writer-wins.
pub struct DiscoverCache {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl DiscoverCache {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Fetch the corpus for `key`, if present and fresh.
    pub async fn get(&self, key: &str) -> Option<Arc<Vec<CatalogItem>>> {
        let now = self.clock.now();
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if now.duration_since(entry.fetched_at) < self.ttl {
            Some(Arc::clone(&entry.items))
        } else {
            None
        }
    }

    /// Store a freshly aggregated corpus, replacing any previous entry
    /// for the key. Returns the stored snapshot for immediate use.
    pub async fn put(&self, key: String, items: Vec<CatalogItem>) -> Arc<Vec<CatalogItem>> {
        let items = Arc::new(items);
        let entry = CacheEntry {
            items: Arc::clone(&items),
            fetched_at: self.clock.now(),
        };
        self.entries.write().await.insert(key, entry);
        items
    }
}
