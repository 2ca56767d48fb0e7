pub mod cache;
pub mod filter;
pub mod paginator;
pub mod service;

pub use cache::{Clock, DiscoverCache, SystemClock, DISCOVER_CACHE_TTL};
pub use filter::{DiscoverFilter, DiscoverMode, ResidualFilter};
pub use paginator::PageResult;
pub use service::{DiscoverService, DiscoverServiceApi};
