use crate::domain::catalog::CatalogItem;
use crate::infrastructure::upstream::Listing;

/// The filter dimensions a discover request may combine. The upstream
/// can only satisfy one of them per request; the rest become residual
/// predicates applied client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoverFilter {
    pub category: Option<String>,
    pub country: Option<String>,
    pub year: Option<i32>,
}

/// How a discover request will be served, decided once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoverMode {
    /// Zero or one dimension set: the upstream satisfies the whole
    /// filter, so the request is a plain paginated passthrough.
    Passthrough(Listing),
    /// Two or more dimensions set: fan out over `listing`, then apply
    /// `residual` client-side and paginate from the cached corpus.
    Aggregate {
        listing: Listing,
        residual: ResidualFilter,
    },
}

/// Predicates the upstream request could not apply. All set predicates
/// must hold for an item to survive (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidualFilter {
    pub category: Option<String>,
    pub country: Option<String>,
    pub year: Option<i32>,
}

impl ResidualFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.country.is_none() && self.year.is_none()
    }

    pub fn matches(&self, item: &CatalogItem) -> bool {
        if let Some(category) = &self.category {
            if !item.in_category(category) {
                return false;
            }
        }
        if let Some(country) = &self.country {
            if !item.in_country(country) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if item.year != Some(year) {
                return false;
            }
        }
        true
    }
}

impl DiscoverFilter {
    /// The listing endpoint that will satisfy one of the requested
    /// dimensions upstream. Fixed precedence: category wins over year,
    /// year wins over country. The order is a compatibility choice with
    /// no deeper rationale; changing it changes which corpus gets
    /// fetched, so it is pinned by tests.
    pub fn upstream_listing(&self) -> Listing {
        if let Some(category) = &self.category {
            Listing::Category(category.clone())
        } else if let Some(year) = self.year {
            Listing::Year(year)
        } else if let Some(country) = &self.country {
            Listing::Country(country.clone())
        } else {
            Listing::Latest
        }
    }

    /// The predicates left over once `listing` is satisfied upstream.
    pub fn residual_for(&self, listing: &Listing) -> ResidualFilter {
        ResidualFilter {
            category: match listing {
                Listing::Category(_) => None,
                _ => self.category.clone(),
            },
            country: match listing {
                Listing::Country(_) => None,
                _ => self.country.clone(),
            },
            year: match listing {
                Listing::Year(_) => None,
                _ => self.year,
            },
        }
    }

    pub fn mode(&self) -> DiscoverMode {
        let listing = self.upstream_listing();
        let residual = self.residual_for(&listing);
        if residual.is_empty() {
            DiscoverMode::Passthrough(listing)
        } else {
            DiscoverMode::Aggregate { listing, residual }
        }
    }

    /// Canonical cache key over the requested dimension values. All set
    /// dimensions participate, including the upstream-satisfied one:
    /// that dimension decides which corpus was fetched, so leaving it
    /// out would alias distinct corpora under one entry.
    pub fn cache_key(&self) -> String {
        format!(
            "{}|{}|{}",
            self.category.as_deref().unwrap_or(""),
            self.country.as_deref().unwrap_or(""),
            self.year.map(|y| y.to_string()).unwrap_or_default(),
        )
    }
}
