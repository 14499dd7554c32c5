//! Catalog sources.
//!
//! The store never talks to a catalog directly: the application layer awaits
//! a [`CatalogSource`] and dispatches the result as `SET_PRODUCTS`.
//!
//! - [`MockCatalog`] - the built-in six-product fixture with simulated latency
//! - [`CachedCatalog`] - `moka` TTL cache in front of any other source

mod cache;
mod mock;

pub use cache::CachedCatalog;
pub use mock::{MockCatalog, fixture_products};

use std::future::Future;

use thiserror::Error;

use hanami_core::{Product, ProductId};

/// Errors a catalog backend can report.
///
/// The built-in mock never fails; the variant exists for network-backed
/// sources.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The catalog could not be reached or answered with garbage.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to the product catalog.
pub trait CatalogSource: Send + Sync {
    /// Every product, in catalog order.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send;

    /// A single product, or `None` when no product has this ID.
    fn get_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, CatalogError>> + Send;
}
