//! Listing, search, product detail and path navigation.

use hanami_core::ProductId;
use hanami_storefront::catalog::CatalogSource;
use hanami_storefront::routes::Route;
use hanami_storefront::{AppState, Result};

use crate::render;

/// The home page, filtered by `search` when given.
pub async fn products<C: CatalogSource>(app: &mut AppState<C>, search: Option<&str>) -> String {
    app.load_products().await;
    app.search(search.unwrap_or_default());
    render::home(&app.home(), app.state())
}

/// The product detail page.
///
/// # Errors
///
/// Returns an error if the catalog cannot be reached.
pub async fn product<C: CatalogSource>(app: &AppState<C>, id: ProductId) -> Result<String> {
    Ok(match app.product_detail(id).await? {
        Some(product) => render::product_page(&product, app.state()),
        None => render::PRODUCT_NOT_FOUND.to_string(),
    })
}

/// Render whatever page `path` points at.
///
/// # Errors
///
/// Returns an error if the catalog cannot be reached.
pub async fn open<C: CatalogSource>(app: &mut AppState<C>, path: &str) -> Result<String> {
    match Route::parse(path) {
        Route::Home => Ok(products(app, None).await),
        Route::Product(id) => product(app, id).await,
        Route::Cart => Ok(render::cart(app.state())),
        Route::NotFound => Ok(render::PAGE_NOT_FOUND.to_string()),
    }
}
