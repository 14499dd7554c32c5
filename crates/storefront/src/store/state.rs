//! The storefront's domain state.

use serde::Serialize;

use hanami_core::{CartItem, Product, ProductId};

/// Snapshot of everything the views render from.
///
/// A `StoreState` is never modified in place: each transition produces a new
/// snapshot, so a reference handed to a view stays valid and unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    pub products: Vec<Product>,
    pub cart: Vec<CartItem>,
    /// Product IDs in insertion order, without duplicates.
    pub wishlist: Vec<ProductId>,
    pub search_query: String,
    pub loading: bool,
}

impl StoreState {
    /// Look up a product in the loaded listing.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.wishlist.contains(&id)
    }

    /// Whether any cart line (in any size) holds the product.
    #[must_use]
    pub fn is_in_cart(&self, id: ProductId) -> bool {
        self.cart.iter().any(|item| item.product_id() == id)
    }

    /// Cart line keyed by `(id, size)`.
    #[must_use]
    pub fn cart_line(&self, id: ProductId, size: &str) -> Option<&CartItem> {
        self.cart.iter().find(|item| item.is_line(id, size))
    }
}
