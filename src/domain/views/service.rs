use super::model::{Period, TopViewEntry, ViewEntry};
use crate::infrastructure::repositories::ViewRepository;
use async_trait::async_trait;
use chrono::{Days, Utc};
use std::sync::Arc;

/// View-count analytics over a [`ViewRepository`]. Read paths and the
/// increment path both degrade to zero/empty on repository failure; a
/// broken counter must never take a page down with it.
pub struct ViewsService {
    repository: Arc<dyn ViewRepository>,
}

impl ViewsService {
    pub fn new(repository: Arc<dyn ViewRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
pub trait ViewsServiceApi: Send + Sync {
    /// Lifetime view count for one title; 0 when unknown.
    async fn get_count(&self, slug: &str) -> u64;

    /// Record one view, returning the new lifetime total.
    async fn increment(&self, slug: &str, name: Option<String>, thumb: Option<String>) -> u64;

    /// Highest-viewed titles within `period`, at most `limit` rows.
    async fn top(&self, period: Period, limit: usize) -> Vec<TopViewEntry>;

    /// Number of titles with any recorded views.
    async fn tracked(&self) -> usize;
}

#[async_trait]
impl ViewsServiceApi for ViewsService {
    async fn get_count(&self, slug: &str) -> u64 {
        match self.repository.get(slug).await {
            Ok(entry) => entry.map(|e| e.total).unwrap_or(0),
            Err(err) => {
                tracing::warn!(slug, error = %err, "view count read failed");
                0
            }
        }
    }

    async fn increment(&self, slug: &str, name: Option<String>, thumb: Option<String>) -> u64 {
        let date_key = today_key();
        match self
            .repository
            .record(slug, name.as_deref(), thumb.as_deref(), &date_key)
            .await
        {
            Ok(total) => total,
            Err(err) => {
                tracing::warn!(slug, error = %err, "view increment failed");
                0
            }
        }
    }

    async fn top(&self, period: Period, limit: usize) -> Vec<TopViewEntry> {
        let entries = match self.repository.all().await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(error = %err, "top views read failed");
                return Vec::new();
            }
        };

        let mut ranked: Vec<TopViewEntry> = entries
            .into_iter()
            .map(|(slug, entry)| {
                let views = match period.days() {
                    None => entry.total,
                    Some(days) => views_in_range(&entry, days),
                };
                TopViewEntry {
                    name: entry.name.unwrap_or_else(|| slug.clone()),
                    thumb: entry.thumb.unwrap_or_default(),
                    slug,
                    views,
                }
            })
            // All-time rankings keep zero rows; windowed ones drop them.
            .filter(|row| period == Period::All || row.views > 0)
            .collect();

        ranked.sort_by(|a, b| b.views.cmp(&a.views));
        ranked.truncate(limit);
        ranked
    }

    async fn tracked(&self) -> usize {
        match self.repository.all().await {
            Ok(entries) => entries.len(),
            Err(_) => 0,
        }
    }
}

/// Today's daily bucket key in UTC.
fn today_key() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Sum the daily buckets of the last `days` days, today included.
fn views_in_range(entry: &ViewEntry, days: u32) -> u64 {
    let today = Utc::now().date_naive();
    (0..days)
        .filter_map(|back| today.checked_sub_days(Days::new(back as u64)))
        .map(|day| {
            entry
                .daily
                .get(&day.format("%Y-%m-%d").to_string())
                .copied()
                .unwrap_or(0)
        })
        .sum()
}
