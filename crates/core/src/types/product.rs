//! Catalog product type.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// Errors reported by [`Product::validate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// The product ID is zero or negative.
    #[error("product id must be positive (got {0})")]
    InvalidId(ProductId),
    /// The product name is empty or whitespace.
    #[error("product {0}: name cannot be empty")]
    EmptyName(ProductId),
    /// The price is zero or negative.
    #[error("product {0}: price must be positive")]
    NonPositivePrice(ProductId),
    /// The original (pre-sale) price is not above the current price.
    #[error("product {id}: original price {original} must exceed price {price}")]
    OriginalPriceTooLow {
        /// Offending product.
        id: ProductId,
        /// Current price.
        price: Price,
        /// Pre-sale price.
        original: Price,
    },
    /// The image is not an absolute URL.
    #[error("product {id}: invalid image url: {reason}")]
    InvalidImage {
        /// Offending product.
        id: ProductId,
        /// Parser message.
        reason: String,
    },
    /// The rating is outside `[0, 5]`.
    #[error("product {0}: rating must be between 0 and 5")]
    RatingOutOfRange(ProductId),
    /// The product offers no sizes.
    #[error("product {0}: at least one size is required")]
    NoSizes(ProductId),
    /// The discount is above 100 percent.
    #[error("product {id}: discount {discount}% exceeds 100%")]
    DiscountOutOfRange {
        /// Offending product.
        id: ProductId,
        /// Discount percent.
        discount: u8,
    },
}

/// A catalog entry.
///
/// Products are immutable once fetched; the cart keeps its own snapshot of a
/// product taken when the line was added.
///
/// Field names serialize in camelCase (`originalPrice`, `isNew`, `inStock`)
/// so persisted carts keep the same shape as the browser storefront wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Pre-sale price, present only when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    pub image: String,
    pub category: String,
    pub rating: f32,
    pub is_new: bool,
    pub in_stock: bool,
    pub description: String,
    pub sizes: Vec<String>,
    /// Sale discount in whole percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
}

impl Product {
    /// Maximum customer rating.
    pub const MAX_RATING: f32 = 5.0;

    /// Check every catalog constraint, returning the first violation.
    ///
    /// # Errors
    ///
    /// Returns a [`ProductError`] describing the violated constraint.
    pub fn validate(&self) -> Result<(), ProductError> {
        let id = self.id;
        if !id.is_positive() {
            return Err(ProductError::InvalidId(id));
        }
        if self.name.trim().is_empty() {
            return Err(ProductError::EmptyName(id));
        }
        if !self.price.is_positive() {
            return Err(ProductError::NonPositivePrice(id));
        }
        if let Some(original) = self.original_price
            && original <= self.price
        {
            return Err(ProductError::OriginalPriceTooLow {
                id,
                price: self.price,
                original,
            });
        }
        if let Err(e) = url::Url::parse(&self.image) {
            return Err(ProductError::InvalidImage {
                id,
                reason: e.to_string(),
            });
        }
        if !(0.0..=Self::MAX_RATING).contains(&self.rating) {
            return Err(ProductError::RatingOutOfRange(id));
        }
        if self.sizes.is_empty() {
            return Err(ProductError::NoSizes(id));
        }
        if let Some(discount) = self.discount
            && discount > 100
        {
            return Err(ProductError::DiscountOutOfRange { id, discount });
        }
        Ok(())
    }

    /// Whether the product carries a sale discount.
    #[must_use]
    pub const fn is_on_sale(&self) -> bool {
        self.discount.is_some()
    }

    /// Whether `size` is one of the offered sizes.
    #[must_use]
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// The size preselected on the product page (the first offered size).
    #[must_use]
    pub fn default_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }

    /// Amount saved against the original price, if on sale.
    #[must_use]
    pub fn savings(&self) -> Option<Price> {
        self.original_price
            .map(|original| Price::new(original.amount() - self.price.amount()))
    }
}
