use crate::domain::views::ViewEntry;
use async_trait::async_trait;
use std::collections::HashMap;

/// Storage port for view counters.
///
/// Implementations own durability (file, database, …); callers treat
/// every operation as fallible and degrade rather than propagate.
#[async_trait]
pub trait ViewRepository: Send + Sync {
    /// Counters for one title, if any views were ever recorded.
    async fn get(&self, slug: &str) -> Result<Option<ViewEntry>, String>;

    /// Add one view under `date_key`'s daily bucket, updating display
    /// metadata when provided. Returns the new lifetime total.
    async fn record(
        &self,
        slug: &str,
        name: Option<&str>,
        thumb: Option<&str>,
        date_key: &str,
    ) -> Result<u64, String>;

    /// Snapshot of every tracked title.
    async fn all(&self) -> Result<HashMap<String, ViewEntry>, String>;
}
