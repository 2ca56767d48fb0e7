pub mod model;
pub mod service;

pub use model::{Period, TopViewEntry, ViewEntry};
pub use service::{ViewsService, ViewsServiceApi};
