//! Integration tests for persisting and rehydrating sessions.
//!
//! Each "session" is a fresh `AppState` over the same storage, which is what
//! two separate runs of the CLI look like.

use hanami_core::ProductId;
use hanami_integration_tests::{instant_catalog, instant_config, session};
use hanami_storefront::AppState;
use hanami_storefront::persistence::RehydrationStrategy;
use hanami_storefront::storage::{
    CART_KEY, FileStorage, KeyValueStorage, MemoryStorage, WISHLIST_KEY,
};

// =============================================================================
// Memory Storage Tests
// =============================================================================

#[tokio::test]
async fn test_load_rehydration_restores_same_cart() {
    let storage = MemoryStorage::new();
    let mut first = session(storage.clone(), RehydrationStrategy::Load);
    first.add_to_cart(ProductId::new(1), Some("S")).await.expect("add");
    first.add_to_cart(ProductId::new(1), Some("M")).await.expect("add");
    first.add_to_cart(ProductId::new(1), Some("M")).await.expect("add");
    first.add_to_cart(ProductId::new(6), Some("XL")).await.expect("add");
    first.toggle_wishlist(ProductId::new(2)).await.expect("toggle");

    let second = session(storage, RehydrationStrategy::Load);

    assert_eq!(second.state().cart, first.state().cart);
    assert_eq!(second.state().wishlist, first.state().wishlist);
}

#[tokio::test]
async fn test_replay_rehydration_restores_single_size_lines() {
    let storage = MemoryStorage::new();
    let mut first = session(storage.clone(), RehydrationStrategy::Replay);
    for _ in 0..3 {
        first.add_to_cart(ProductId::new(4), Some("M")).await.expect("add");
    }
    first.add_to_cart(ProductId::new(5), Some("XS")).await.expect("add");
    first.toggle_wishlist(ProductId::new(1)).await.expect("toggle");
    first.toggle_wishlist(ProductId::new(6)).await.expect("toggle");

    let second = session(storage, RehydrationStrategy::Replay);

    assert_eq!(second.state().cart, first.state().cart);
    assert_eq!(second.state().wishlist, first.state().wishlist);
}

#[tokio::test]
async fn test_rehydration_does_not_rewrite_storage() {
    let storage = MemoryStorage::new();
    storage
        .set(WISHLIST_KEY, "[4, 2]")
        .expect("seed wishlist");

    let app = session(storage.clone(), RehydrationStrategy::Load);

    assert_eq!(
        app.state().wishlist,
        vec![ProductId::new(4), ProductId::new(2)]
    );
    assert_eq!(
        storage.get(WISHLIST_KEY).expect("read").as_deref(),
        Some("[4, 2]")
    );
}

#[tokio::test]
async fn test_malformed_cart_starts_empty_and_is_overwritten() {
    let storage = MemoryStorage::new();
    storage.set(CART_KEY, "{not a cart").expect("seed cart");
    storage.set(WISHLIST_KEY, "[3]").expect("seed wishlist");

    let mut app = session(storage.clone(), RehydrationStrategy::Load);
    assert!(app.state().cart.is_empty());
    assert!(app.state().is_in_wishlist(ProductId::new(3)));

    app.add_to_cart(ProductId::new(2), None).await.expect("add");
    let raw = storage.get(CART_KEY).expect("read").expect("cart written");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_persisted_cart_uses_camel_case_fields() {
    let storage = MemoryStorage::new();
    let mut app = session(storage.clone(), RehydrationStrategy::Load);
    app.add_to_cart(ProductId::new(1), Some("L")).await.expect("add");

    let raw = storage.get(CART_KEY).expect("read").expect("cart written");
    assert!(raw.contains("\"originalPrice\""));
    assert!(raw.contains("\"inStock\""));
    assert!(raw.contains("\"quantity\":1"));
    assert!(raw.contains("\"size\":\"L\""));
}

// =============================================================================
// File Storage Tests
// =============================================================================

#[tokio::test]
async fn test_file_storage_survives_sessions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = instant_config(dir.path(), RehydrationStrategy::Load);

    {
        let storage = FileStorage::open(dir.path()).expect("open storage");
        let mut app = AppState::with_storage(config.clone(), instant_catalog(), storage);
        app.add_to_cart(ProductId::new(6), Some("S")).await.expect("add");
        app.add_to_cart(ProductId::new(6), Some("S")).await.expect("add");
        app.toggle_wishlist(ProductId::new(5)).await.expect("toggle");
    }

    assert!(dir.path().join("hanami-cart.json").exists());
    assert!(dir.path().join("hanami-wishlist.json").exists());

    let storage = FileStorage::open(dir.path()).expect("reopen storage");
    let app = AppState::with_storage(config, instant_catalog(), storage);
    let line = app
        .state()
        .cart_line(ProductId::new(6), "S")
        .expect("line restored");
    assert_eq!(line.quantity, 2);
    assert!(app.state().is_in_wishlist(ProductId::new(5)));
}

#[tokio::test]
async fn test_cleared_cart_persists_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = instant_config(dir.path(), RehydrationStrategy::Load);

    {
        let storage = FileStorage::open(dir.path()).expect("open storage");
        let mut app = AppState::with_storage(config.clone(), instant_catalog(), storage);
        app.add_to_cart(ProductId::new(2), Some("M")).await.expect("add");
        app.clear_cart();
    }

    let storage = FileStorage::open(dir.path()).expect("reopen storage");
    assert_eq!(storage.get(CART_KEY).expect("read").as_deref(), Some("[]"));
    let app = AppState::with_storage(config, instant_catalog(), storage);
    assert!(app.state().cart.is_empty());
}
