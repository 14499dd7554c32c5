//! Cart totals and order placement.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use hanami_core::{CartItem, Price};

use crate::store::{Store, StoreAction};

/// Errors that can occur when placing an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// There is nothing to order.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,
}

/// Sum of unit price times quantity over every line.
#[must_use]
pub fn cart_total(cart: &[CartItem]) -> Price {
    cart.iter().map(CartItem::line_total).sum()
}

/// Number of units in the cart (the navbar badge).
#[must_use]
pub fn cart_item_count(cart: &[CartItem]) -> u32 {
    cart.iter()
        .fold(0_u32, |count, item| count.saturating_add(item.quantity))
}

/// Receipt for a placed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderConfirmation {
    pub id: Uuid,
    pub total: Price,
    pub item_count: u32,
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    /// The thank-you line shown after ordering.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Thanks for shopping!! Please visit again. Total: {}",
            self.total
        )
    }
}

/// Place an order for the current cart and empty it.
///
/// Only the cart is cleared; the wishlist is left as it was.
///
/// # Errors
///
/// Returns `CheckoutError::EmptyCart` (and dispatches nothing) when the cart
/// is empty.
pub fn place_order(store: &mut Store) -> Result<OrderConfirmation, CheckoutError> {
    let cart = &store.state().cart;
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let confirmation = OrderConfirmation {
        id: Uuid::new_v4(),
        total: cart_total(cart),
        item_count: cart_item_count(cart),
        placed_at: Utc::now(),
    };
    store.dispatch(StoreAction::ClearCart);

    info!(
        order_id = %confirmation.id,
        total = %confirmation.total,
        items = confirmation.item_count,
        "order placed"
    );
    Ok(confirmation)
}
