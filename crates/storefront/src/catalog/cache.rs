//! Caching catalog decorator.

use std::time::Duration;

use moka::future::Cache;
use tracing::{debug, instrument};

use hanami_core::{Product, ProductId};

use super::{CatalogError, CatalogSource};

/// Cache key for listings and single products.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum CacheKey {
    Products,
    Product(ProductId),
}

/// Cached value types.
#[derive(Debug, Clone)]
enum CacheValue {
    Products(Vec<Product>),
    Product(Box<Product>),
}

/// A [`CatalogSource`] that remembers answers from an inner source.
///
/// Listings and found products are cached for the configured TTL; misses
/// ("not found") and errors are never cached.
#[derive(Clone)]
pub struct CachedCatalog<C> {
    inner: C,
    cache: Cache<CacheKey, CacheValue>,
}

impl<C: CatalogSource> CachedCatalog<C> {
    /// Default time-to-live for cached entries.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

    /// Wrap `inner` with a cache whose entries expire after `ttl`.
    #[must_use]
    pub fn new(inner: C, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(ttl)
            .build();
        Self { inner, cache }
    }
}

impl<C: CatalogSource> CatalogSource for CachedCatalog<C> {
    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        if let Some(CacheValue::Products(products)) = self.cache.get(&CacheKey::Products).await {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let products = self.inner.list_all().await?;
        self.cache
            .insert(CacheKey::Products, CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        let key = CacheKey::Product(id);
        if let Some(CacheValue::Product(product)) = self.cache.get(&key).await {
            debug!("Cache hit for product");
            return Ok(Some(*product));
        }

        let product = self.inner.get_by_id(id).await?;
        if let Some(found) = &product {
            self.cache
                .insert(key, CacheValue::Product(Box::new(found.clone())))
                .await;
        }
        Ok(product)
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for CachedCatalog<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedCatalog")
            .field("inner", &self.inner)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::catalog::MockCatalog;

    /// Source that counts how often it is asked.
    #[derive(Clone, Default)]
    struct CountingCatalog {
        inner: MockCatalog,
        calls: Arc<AtomicUsize>,
    }

    impl CatalogSource for CountingCatalog {
        async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.list_all().await
        }

        async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.get_by_id(id).await
        }
    }

    fn counting() -> (CachedCatalog<CountingCatalog>, Arc<AtomicUsize>) {
        let source = CountingCatalog {
            inner: MockCatalog::new().with_latency(Duration::ZERO, Duration::ZERO),
            calls: Arc::default(),
        };
        let calls = Arc::clone(&source.calls);
        (CachedCatalog::new(source, CachedCatalog::<CountingCatalog>::DEFAULT_TTL), calls)
    }

    #[tokio::test]
    async fn test_listing_is_cached() {
        let (catalog, calls) = counting();
        let first = catalog.list_all().await.unwrap();
        let second = catalog.list_all().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_found_product_is_cached_but_miss_is_not() {
        let (catalog, calls) = counting();

        catalog.get_by_id(ProductId::new(1)).await.unwrap().unwrap();
        catalog.get_by_id(ProductId::new(1)).await.unwrap().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(catalog.get_by_id(ProductId::new(99)).await.unwrap().is_none());
        assert!(catalog.get_by_id(ProductId::new(99)).await.unwrap().is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
