use super::view_repository::ViewRepository;
use crate::domain::views::ViewEntry;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// JSON-file-backed view counters.
///
/// The whole counter map lives in memory; the file is read once at
/// startup and written back by `flush`, on a timer and once more on
/// shutdown. Losing the final partial interval on a crash is accepted.
pub struct FileViewRepository {
    path: PathBuf,
    entries: RwLock<HashMap<String, ViewEntry>>,
}

impl FileViewRepository {
    /// Load counters from `path`. A missing file starts empty; an
    /// unreadable or malformed one is logged and starts empty rather
    /// than refusing to boot.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "views file malformed, starting empty");
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "views file unreadable, starting empty");
                HashMap::new()
            }
        };

        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current counters to disk.
    pub async fn flush(&self) -> std::io::Result<()> {
        let snapshot = self.entries.read().await.clone();
        let raw = serde_json::to_string_pretty(&snapshot)?;
        tokio::fs::write(&self.path, raw).await
    }

    /// Spawn the periodic flush task. The task runs until the process
    /// exits; the final flush on shutdown covers the last interval.
    pub fn spawn_flush_task(self: &Arc<Self>, interval: Duration) -> tokio::task::JoinHandle<()> {
        let repository = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick fires immediately; skip it.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(err) = repository.flush().await {
                    tracing::warn!(error = %err, "periodic views flush failed");
                }
            }
        })
    }
}

#[async_trait]
impl ViewRepository for FileViewRepository {
    async fn get(&self, slug: &str) -> Result<Option<ViewEntry>, String> {
        Ok(self.entries.read().await.get(slug).cloned())
    }

    async fn record(
        &self,
        slug: &str,
        name: Option<&str>,
        thumb: Option<&str>,
        date_key: &str,
    ) -> Result<u64, String> {
        let mut entries = self.entries.write().await;
        let entry = entries.entry(slug.to_string()).or_default();
        entry.total += 1;
        *entry.daily.entry(date_key.to_string()).or_insert(0) += 1;
        if let Some(name) = name {
            entry.name = Some(name.to_string());
        }
        if let Some(thumb) = thumb {
            entry.thumb = Some(thumb.to_string());
        }
        Ok(entry.total)
    }

    async fn all(&self) -> Result<HashMap<String, ViewEntry>, String> {
        Ok(self.entries.read().await.clone())
    }
}
