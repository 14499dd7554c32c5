//! Cart commands and order placement.

use hanami_core::ProductId;
use hanami_storefront::catalog::CatalogSource;
use hanami_storefront::state::QuantityChange;
use hanami_storefront::{AppState, Result};

use crate::render;

pub fn show<C: CatalogSource>(app: &AppState<C>) -> String {
    render::cart(app.state())
}

/// Add one unit and show the cart.
///
/// # Errors
///
/// Returns an error if the product is unknown, out of stock or not offered in
/// `size`.
pub async fn add<C: CatalogSource>(
    app: &mut AppState<C>,
    id: ProductId,
    size: Option<&str>,
) -> Result<String> {
    let notice = app.add_to_cart(id, size).await?;
    Ok(format!("{notice}\n\n{}", render::cart(app.state())))
}

/// Set a product's quantity. Zero removes it, but only with `confirmed`.
pub fn set_quantity<C: CatalogSource>(
    app: &mut AppState<C>,
    id: ProductId,
    quantity: i64,
    confirmed: bool,
) -> String {
    match app.change_quantity(id, quantity) {
        QuantityChange::Updated => render::cart(app.state()),
        QuantityChange::ConfirmRemoval(id) if confirmed => {
            let notice = app.remove_from_cart(id);
            format!("{notice}\n\n{}", render::cart(app.state()))
        }
        QuantityChange::ConfirmRemoval(id) => format!(
            "A quantity of {quantity} removes product {id} from your cart. \
             Run again with --yes to remove it."
        ),
    }
}

/// Remove one size of a product, or every size when `size` is `None`.
pub fn remove<C: CatalogSource>(
    app: &mut AppState<C>,
    id: ProductId,
    size: Option<&str>,
) -> String {
    let notice = match size {
        Some(size) => app.remove_cart_line(id, size),
        None => app.remove_from_cart(id),
    };
    format!("{notice}\n\n{}", render::cart(app.state()))
}

pub fn clear<C: CatalogSource>(app: &mut AppState<C>) -> String {
    render::cart(app.clear_cart())
}

/// Place the order.
///
/// # Errors
///
/// Returns an error if the cart is empty.
pub fn order<C: CatalogSource>(app: &mut AppState<C>) -> Result<String> {
    let confirmation = app.place_order()?;
    Ok(render::order(&confirmation))
}
