//! Cart line type.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;
use super::product::Product;

/// One line in the cart.
///
/// A cart holds at most one line per `(product id, size)` pair. The product is
/// a snapshot copied when the line was created, not a live catalog reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
    pub size: String,
}

impl CartItem {
    /// Create a line with quantity 1.
    #[must_use]
    pub fn new(product: Product, size: impl Into<String>) -> Self {
        Self {
            product,
            quantity: 1,
            size: size.into(),
        }
    }

    /// The ID of the product on this line.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Whether this line is keyed by `(product_id, size)`.
    #[must_use]
    pub fn is_line(&self, product_id: ProductId, size: &str) -> bool {
        self.product.id == product_id && self.size == size
    }

    /// Unit price times quantity, saturating at the largest representable
    /// amount.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}
