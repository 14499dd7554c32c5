//! Wishlist and restock notification commands.

use hanami_core::ProductId;
use hanami_storefront::catalog::CatalogSource;
use hanami_storefront::{AppState, Result};

use crate::render;

/// The wishlist, with names from the catalog listing.
pub async fn show<C: CatalogSource>(app: &mut AppState<C>) -> String {
    app.load_products().await;
    render::wishlist(app.state())
}

/// Toggle a product's wishlist membership.
///
/// # Errors
///
/// Returns an error if the product is unknown.
pub async fn toggle<C: CatalogSource>(app: &mut AppState<C>, id: ProductId) -> Result<String> {
    Ok(app.toggle_wishlist(id).await?.to_string())
}

/// Register interest in a product coming back in stock.
///
/// # Errors
///
/// Returns an error if the product is unknown.
pub async fn notify<C: CatalogSource>(app: &AppState<C>, id: ProductId) -> Result<String> {
    Ok(app.request_restock(id).await?.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::testing;

    #[tokio::test]
    async fn test_toggle_and_show() {
        let mut app = testing::app();
        let output = toggle(&mut app, ProductId::new(6)).await.unwrap();
        assert_eq!(
            output,
            "Added to wishlist: Evening Elegance Dress added to your wishlist"
        );
        assert!(show(&mut app).await.contains("Evening Elegance Dress"));

        toggle(&mut app, ProductId::new(6)).await.unwrap();
        assert_eq!(show(&mut app).await, render::EMPTY_WISHLIST);
    }

    #[tokio::test]
    async fn test_notify_unknown_product() {
        let app = testing::app();
        assert!(notify(&app, ProductId::new(3)).await.is_ok());
        assert!(notify(&app, ProductId::new(99)).await.is_err());
    }
}
