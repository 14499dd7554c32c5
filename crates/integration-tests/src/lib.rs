//! Integration tests for the Hanami storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p hanami-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart` - Cart and wishlist transitions through the store
//! - `storefront_persistence` - Persist and rehydrate across sessions
//! - `storefront_search` - Listing and search over the catalog fixture
//! - `storefront_checkout` - Totals and order placement
//!
//! The helpers below build sessions with an instant catalog so nothing waits
//! on simulated latency.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;
use std::time::Duration;

use hanami_core::{Product, ProductId};
use hanami_storefront::AppState;
use hanami_storefront::catalog::{MockCatalog, fixture_products};
use hanami_storefront::config::StorefrontConfig;
use hanami_storefront::persistence::RehydrationStrategy;
use hanami_storefront::storage::KeyValueStorage;

/// Configuration with no simulated catalog latency.
#[must_use]
pub fn instant_config(data_dir: &Path, rehydration: RehydrationStrategy) -> StorefrontConfig {
    let mut config = StorefrontConfig {
        data_dir: data_dir.to_path_buf(),
        rehydration,
        ..StorefrontConfig::default()
    };
    config.catalog.list_latency = Duration::ZERO;
    config.catalog.item_latency = Duration::ZERO;
    config
}

/// The fixture catalog with no latency.
#[must_use]
pub fn instant_catalog() -> MockCatalog {
    MockCatalog::new().with_latency(Duration::ZERO, Duration::ZERO)
}

/// A session rehydrated from `storage` that persists back into it.
#[must_use]
pub fn session<S>(storage: S, rehydration: RehydrationStrategy) -> AppState<MockCatalog>
where
    S: KeyValueStorage + 'static,
{
    let config = instant_config(Path::new(".hanami"), rehydration);
    AppState::with_storage(config, instant_catalog(), storage)
}

/// A product from the catalog fixture.
///
/// # Panics
///
/// Panics if the fixture has no product with this ID.
#[must_use]
pub fn fixture(id: i32) -> Product {
    let id = ProductId::new(id);
    fixture_products()
        .into_iter()
        .find(|p| p.id == id)
        .unwrap_or_else(|| panic!("no fixture product {id}"))
}
