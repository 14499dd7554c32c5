//! User-facing notices (the toasts the views show after an action).

use std::fmt;

use serde::Serialize;

use hanami_core::Product;

/// A short title plus a one-line description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn added_to_cart(product: &Product, size: &str) -> Self {
        Self::new(
            "Added to cart",
            format!("{} ({size}) has been added to your cart", product.name),
        )
    }

    /// `added` is the wishlist membership after the toggle.
    #[must_use]
    pub fn wishlist_toggled(product: &Product, added: bool) -> Self {
        if added {
            Self::new(
                "Added to wishlist",
                format!("{} added to your wishlist", product.name),
            )
        } else {
            Self::new(
                "Removed from wishlist",
                format!("{} removed from your wishlist", product.name),
            )
        }
    }

    #[must_use]
    pub fn item_removed() -> Self {
        Self::new("Item removed", "The item has been removed from your cart")
    }

    #[must_use]
    pub fn restock_requested() -> Self {
        Self::new(
            "Notification set!",
            "We'll notify you when this item is back in stock",
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
