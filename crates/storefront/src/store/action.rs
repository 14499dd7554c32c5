//! Actions accepted by the store.

use serde::{Deserialize, Serialize};

use hanami_core::{CartItem, Product, ProductId};

/// A state transition request.
///
/// Serializes as `{"type": "ADD_TO_CART", "payload": {...}}`, the shape the
/// browser storefront dispatched. An action whose `type` is not recognized
/// deserializes to [`StoreAction::Unrecognized`], which leaves the state
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreAction {
    /// Replace the product listing wholesale.
    SetProducts(Vec<Product>),
    /// Replace the loading flag.
    SetLoading(bool),
    /// Add one unit of `product` in `size`, merging with an existing line.
    AddToCart { product: Product, size: String },
    /// Remove every cart line for a product, whatever the size.
    RemoveFromCart(ProductId),
    /// Remove only the line keyed by `(product_id, size)`.
    RemoveCartLine {
        #[serde(rename = "productId")]
        product_id: ProductId,
        size: String,
    },
    /// Set the quantity of every line for a product; `<= 0` removes them.
    UpdateQuantity {
        #[serde(rename = "productId")]
        product_id: ProductId,
        quantity: i64,
    },
    /// Empty the cart.
    ClearCart,
    /// Add the product to the wishlist, or remove it if already present.
    ToggleWishlist(ProductId),
    /// Replace the search query.
    SetSearchQuery(String),
    /// Replace the cart in one step (rehydration).
    LoadCart(Vec<CartItem>),
    /// Replace the wishlist in one step (rehydration).
    LoadWishlist(Vec<ProductId>),
    /// Any action type this store does not know.
    #[serde(other)]
    Unrecognized,
}

impl StoreAction {
    /// Wire names of every action this store understands.
    pub const TYPES: [&'static str; 11] = [
        "SET_PRODUCTS",
        "SET_LOADING",
        "ADD_TO_CART",
        "REMOVE_FROM_CART",
        "REMOVE_CART_LINE",
        "UPDATE_QUANTITY",
        "CLEAR_CART",
        "TOGGLE_WISHLIST",
        "SET_SEARCH_QUERY",
        "LOAD_CART",
        "LOAD_WISHLIST",
    ];

    /// Parse an action from its JSON form.
    ///
    /// Derived deserialization only maps an unknown `type` to
    /// [`StoreAction::Unrecognized`] when no payload is attached. This accepts
    /// an unknown `type` whatever its payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not JSON, or if a known action type
    /// carries a malformed payload.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let unknown = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .is_some_and(|name| !Self::TYPES.iter().any(|known| *known == name));
        if unknown {
            return Ok(Self::Unrecognized);
        }
        serde_json::from_value(value)
    }

    /// The wire name of the action, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetProducts(_) => "SET_PRODUCTS",
            Self::SetLoading(_) => "SET_LOADING",
            Self::AddToCart { .. } => "ADD_TO_CART",
            Self::RemoveFromCart(_) => "REMOVE_FROM_CART",
            Self::RemoveCartLine { .. } => "REMOVE_CART_LINE",
            Self::UpdateQuantity { .. } => "UPDATE_QUANTITY",
            Self::ClearCart => "CLEAR_CART",
            Self::ToggleWishlist(_) => "TOGGLE_WISHLIST",
            Self::SetSearchQuery(_) => "SET_SEARCH_QUERY",
            Self::LoadCart(_) => "LOAD_CART",
            Self::LoadWishlist(_) => "LOAD_WISHLIST",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}
