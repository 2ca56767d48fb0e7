use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A `{slug, name}` reference into a taxonomy (category or country).
/// Unknown upstream fields (ids, …) ride along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyRef {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One catalog title as fetched from the upstream. Immutable snapshot:
/// nothing in this service mutates an item after it is decoded.
///
/// Only the fields the proxy filters and deduplicates on are typed; the
/// remainder of the upstream payload is carried opaquely so passthrough
/// responses keep every field the upstream sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default)]
    pub category: Vec<TaxonomyRef>,
    #[serde(default)]
    pub country: Vec<TaxonomyRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogItem {
    pub fn in_category(&self, slug: &str) -> bool {
        self.category.iter().any(|c| c.slug == slug)
    }

    pub fn in_country(&self, slug: &str) -> bool {
        self.country.iter().any(|c| c.slug == slug)
    }
}
