//! Application state owned by the front end.
//!
//! `AppState` is the one place a session's [`Store`] lives. It is created at
//! program entry and passed explicitly to whatever renders or dispatches, so
//! there is no ambient store to look up and no way to use one that was never
//! created.

use hanami_core::{Product, ProductId};
use tracing::{debug, error, instrument};

use crate::catalog::{CachedCatalog, CatalogSource, MockCatalog};
use crate::checkout::{self, OrderConfirmation};
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::notice::Notice;
use crate::persistence::{PersistenceObserver, rehydrate};
use crate::search::HomeView;
use crate::storage::{FileStorage, KeyValueStorage};
use crate::store::{Store, StoreAction, StoreState};

/// Outcome of a quantity change requested from the cart page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The new quantity was applied.
    Updated,
    /// Dropping to zero removes the product; ask the user first and then call
    /// [`AppState::remove_from_cart`].
    ConfirmRemoval(ProductId),
}

/// Catalog type used by [`AppState::open`].
pub type DefaultCatalog = CachedCatalog<MockCatalog>;

/// Session state: configuration, catalog and the domain store.
#[derive(Debug)]
pub struct AppState<C> {
    config: StorefrontConfig,
    catalog: C,
    store: Store,
}

impl AppState<DefaultCatalog> {
    /// Open a session backed by file storage in `config.data_dir` and the
    /// cached mock catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn open(config: StorefrontConfig) -> Result<Self> {
        let storage = FileStorage::open(&config.data_dir)?;
        let catalog = CachedCatalog::new(
            MockCatalog::new()
                .with_latency(config.catalog.list_latency, config.catalog.item_latency),
            config.catalog.cache_ttl,
        );
        Ok(Self::with_storage(config, catalog, storage))
    }
}

impl<C: CatalogSource> AppState<C> {
    /// Create a new application state around an existing store.
    #[must_use]
    pub const fn new(config: StorefrontConfig, catalog: C, store: Store) -> Self {
        Self {
            config,
            catalog,
            store,
        }
    }

    /// Create a state whose store is rehydrated from `storage` and persists
    /// every later cart and wishlist change back to it.
    #[must_use]
    pub fn with_storage<S>(config: StorefrontConfig, catalog: C, storage: S) -> Self
    where
        S: KeyValueStorage + 'static,
    {
        let mut store = Store::new();
        rehydrate(&mut store, &storage, config.rehydration);
        store.subscribe(PersistenceObserver::new(storage));
        Self::new(config, catalog, store)
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The current domain snapshot.
    #[must_use]
    pub const fn state(&self) -> &StoreState {
        self.store.state()
    }

    /// Dispatch a raw action.
    pub fn dispatch(&mut self, action: StoreAction) -> &StoreState {
        self.store.dispatch(action)
    }

    /// Parse and dispatch an action in its `{"type", "payload"}` form.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidAction` if the JSON does not describe an
    /// action. Unknown action types are not errors; they change nothing.
    pub fn dispatch_json(&mut self, json: &str) -> Result<&StoreState> {
        let action = StoreAction::from_json(json)?;
        if action == StoreAction::Unrecognized {
            debug!("ignoring unrecognized action");
        }
        Ok(self.store.dispatch(action))
    }

    /// Fetch the listing and install it, bracketed by the loading flag.
    ///
    /// A catalog failure is logged; loading still ends and the previous
    /// listing is kept.
    #[instrument(skip(self))]
    pub async fn load_products(&mut self) -> &StoreState {
        self.store.dispatch(StoreAction::SetLoading(true));
        match self.catalog.list_all().await {
            Ok(products) => {
                self.store.dispatch(StoreAction::SetProducts(products));
            }
            Err(e) => error!(error = %e, "Failed to fetch products"),
        }
        self.store.dispatch(StoreAction::SetLoading(false))
    }

    /// Fetch one product for the detail page. `None` is the "not found" page.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be reached.
    #[instrument(skip(self))]
    pub async fn product_detail(&self, id: ProductId) -> Result<Option<Product>> {
        Ok(self.catalog.get_by_id(id).await?)
    }

    /// The home page for `query` (the query is stored in the state).
    pub fn search(&mut self, query: &str) -> HomeView<'_> {
        self.store
            .dispatch(StoreAction::SetSearchQuery(query.to_string()));
        HomeView::from_state(self.store.state())
    }

    /// The home page for the current state.
    #[must_use]
    pub fn home(&self) -> HomeView<'_> {
        HomeView::from_state(self.store.state())
    }

    /// Add one unit of a product. `size` defaults to the first offered size.
    ///
    /// # Errors
    ///
    /// - `ProductNotFound` if no product has this ID
    /// - `OutOfStock` if the product is not in stock
    /// - `InvalidSize` if the product is not offered in `size`
    #[instrument(skip(self))]
    pub async fn add_to_cart(&mut self, id: ProductId, size: Option<&str>) -> Result<Notice> {
        let product = self.find_product(id).await?;
        if !product.in_stock {
            return Err(AppError::OutOfStock(id));
        }

        let size = size
            .or_else(|| product.default_size())
            .unwrap_or_default()
            .to_string();
        if !product.has_size(&size) {
            return Err(AppError::InvalidSize { product: id, size });
        }

        let notice = Notice::added_to_cart(&product, &size);
        self.store.dispatch(StoreAction::AddToCart { product, size });
        Ok(notice)
    }

    /// Add the product to the wishlist, or take it off.
    ///
    /// # Errors
    ///
    /// Returns `ProductNotFound` if no product has this ID.
    #[instrument(skip(self))]
    pub async fn toggle_wishlist(&mut self, id: ProductId) -> Result<Notice> {
        let product = self.find_product(id).await?;
        let state = self.store.dispatch(StoreAction::ToggleWishlist(id));
        Ok(Notice::wishlist_toggled(&product, state.is_in_wishlist(id)))
    }

    /// Ask to be told when an out-of-stock product returns.
    ///
    /// # Errors
    ///
    /// Returns `ProductNotFound` if no product has this ID.
    pub async fn request_restock(&self, id: ProductId) -> Result<Notice> {
        self.find_product(id).await?;
        Ok(Notice::restock_requested())
    }

    /// Set the quantity for every line of a product.
    ///
    /// A quantity of zero (or less) is not applied; the caller must confirm
    /// the removal first.
    pub fn change_quantity(&mut self, id: ProductId, quantity: i64) -> QuantityChange {
        if quantity <= 0 {
            return QuantityChange::ConfirmRemoval(id);
        }
        self.store.dispatch(StoreAction::UpdateQuantity {
            product_id: id,
            quantity,
        });
        QuantityChange::Updated
    }

    /// Remove every line (all sizes) of a product from the cart.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Notice {
        self.store.dispatch(StoreAction::RemoveFromCart(id));
        Notice::item_removed()
    }

    /// Remove only the `(id, size)` line from the cart.
    pub fn remove_cart_line(&mut self, id: ProductId, size: &str) -> Notice {
        self.store.dispatch(StoreAction::RemoveCartLine {
            product_id: id,
            size: size.to_string(),
        });
        Notice::item_removed()
    }

    /// Empty the cart without ordering.
    pub fn clear_cart(&mut self) -> &StoreState {
        self.store.dispatch(StoreAction::ClearCart)
    }

    /// Order everything in the cart and empty it.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Checkout` if the cart is empty.
    pub fn place_order(&mut self) -> Result<OrderConfirmation> {
        Ok(checkout::place_order(&mut self.store)?)
    }

    /// Look in the loaded listing first, then ask the catalog.
    async fn find_product(&self, id: ProductId) -> Result<Product> {
        if let Some(product) = self.store.state().product(id) {
            return Ok(product.clone());
        }
        self.catalog
            .get_by_id(id)
            .await?
            .ok_or(AppError::ProductNotFound(id))
    }
}
