//! Unified error handling.
//!
//! Provides a unified `AppError` type for the application layer. Lower layers
//! keep their own error enums and convert into it with `?`.

use thiserror::Error;

use hanami_core::ProductId;

use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Durable storage could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Catalog operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Order placement was refused.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// No product has this ID.
    #[error("Not found: product {0}")]
    ProductNotFound(ProductId),

    /// The requested size is not offered for the product.
    #[error("Bad request: size {size:?} is not available for product {product}")]
    InvalidSize { product: ProductId, size: String },

    /// The product cannot be added while out of stock.
    #[error("Out of stock: product {0}")]
    OutOfStock(ProductId),

    /// A serialized action could not be parsed.
    #[error("Bad request: invalid action: {0}")]
    InvalidAction(#[from] serde_json::Error),
}

impl AppError {
    /// Whether the error reflects a user mistake rather than a system fault.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::ProductNotFound(_)
                | Self::InvalidSize { .. }
                | Self::OutOfStock(_)
                | Self::InvalidAction(_)
                | Self::Checkout(_)
        )
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
