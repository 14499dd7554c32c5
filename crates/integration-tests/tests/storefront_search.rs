//! Integration tests for listing and search.

use hanami_core::ProductId;
use hanami_integration_tests::session;
use hanami_storefront::catalog::fixture_products;
use hanami_storefront::persistence::RehydrationStrategy;
use hanami_storefront::search::{NO_RESULTS_MESSAGE, filter_products};
use hanami_storefront::storage::MemoryStorage;

fn names(products: &[&hanami_core::Product]) -> Vec<String> {
    products.iter().map(|p| p.name.clone()).collect()
}

// =============================================================================
// Filter Tests
// =============================================================================

#[test]
fn test_dress_search_ignores_case() {
    let products: Vec<_> = fixture_products()
        .into_iter()
        .filter(|p| p.id == ProductId::new(1) || p.id == ProductId::new(2))
        .collect();

    for query in ["dress", "DRESS", "Dress"] {
        assert_eq!(
            names(&filter_products(&products, query)),
            vec!["Sakura Blossom Dress".to_string()]
        );
    }
    assert!(filter_products(&products, "xyz").is_empty());
}

#[test]
fn test_every_fixture_product_validates() {
    for product in fixture_products() {
        assert!(product.validate().is_ok(), "{} is invalid", product.name);
    }
}

// =============================================================================
// Home View Tests
// =============================================================================

#[tokio::test]
async fn test_home_listing_after_load() {
    let mut app = session(MemoryStorage::new(), RehydrationStrategy::Load);
    app.load_products().await;

    let view = app.home();
    assert!(!view.loading);
    assert_eq!(view.heading(), "All Products");
    assert_eq!(view.results.len(), 6);
    assert_eq!(view.on_sale.len(), 3);
    assert_eq!(view.empty_message(), None);
}

#[tokio::test]
async fn test_search_without_hits_shows_message() {
    let mut app = session(MemoryStorage::new(), RehydrationStrategy::Load);
    app.load_products().await;

    let view = app.search("xyz");
    assert_eq!(view.heading(), "Search Results");
    assert!(view.results.is_empty());
    assert!(view.on_sale.is_empty());
    assert_eq!(view.empty_message(), Some(NO_RESULTS_MESSAGE));
}

#[tokio::test]
async fn test_clearing_search_restores_listing() {
    let mut app = session(MemoryStorage::new(), RehydrationStrategy::Load);
    app.load_products().await;

    assert_eq!(app.search("blossom").results.len(), 1);
    assert_eq!(app.search("").results.len(), 6);
}
