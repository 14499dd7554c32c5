//! Command implementations.
//!
//! Each command takes the session's [`AppState`], performs its dispatches and
//! returns the text to print. Nothing here writes to stdout directly.

pub mod browse;
pub mod cart;
pub mod wishlist;

use hanami_storefront::AppState;
use hanami_storefront::catalog::CatalogSource;

/// Dispatch a raw action and show the resulting state as JSON.
pub fn dispatch<C: CatalogSource>(
    app: &mut AppState<C>,
    json: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let state = app.dispatch_json(json)?;
    Ok(serde_json::to_string_pretty(state)?)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::time::Duration;

    use hanami_storefront::AppState;
    use hanami_storefront::catalog::MockCatalog;
    use hanami_storefront::config::StorefrontConfig;
    use hanami_storefront::storage::MemoryStorage;

    /// A session with an instant catalog and in-memory storage.
    pub fn app() -> AppState<MockCatalog> {
        let catalog = MockCatalog::new().with_latency(Duration::ZERO, Duration::ZERO);
        AppState::with_storage(StorefrontConfig::default(), catalog, MemoryStorage::new())
    }
}
