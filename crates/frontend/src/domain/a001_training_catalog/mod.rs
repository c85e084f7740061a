//! Training catalog: categories (loaded once per page) and programs
//! (loaded on every category selection, never cached).
//!
//! - api.rs: `CatalogApi` port and its HTTP implementation
//! - cache.rs: load-once state of the category list
//! - service.rs: `CatalogService`, the shared handle blocks talk to

mod api;
mod cache;
mod service;

pub use api::{CatalogApi, HttpCatalogApi};
pub use cache::CategoryCache;
pub use service::{fetch_programs_fail_closed, CatalogService};

#[cfg(test)]
pub(crate) use service::tests as fakes;
