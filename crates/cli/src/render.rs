//! Plain-text pages.
//!
//! Everything here is a pure function of the store snapshot, so the commands
//! only decide what to dispatch and which page to print afterwards.

use hanami_core::{CartItem, Product};
use hanami_storefront::checkout::{OrderConfirmation, cart_item_count, cart_total};
use hanami_storefront::search::HomeView;
use hanami_storefront::store::StoreState;

pub const EMPTY_CART: &str = "Your cart feels very light!\n\
     Looks like you haven't added anything to your cart yet.";

pub const EMPTY_WISHLIST: &str = "Your wishlist is empty.";

pub const PRODUCT_NOT_FOUND: &str = "Product not found";

pub const PAGE_NOT_FOUND: &str = "Page not found";

/// One listing row: id, name, price and badges.
pub fn product_line(product: &Product, state: &StoreState) -> String {
    let mut line = format!(
        "{:>3}  {:<26} {:>8}",
        product.id,
        product.name,
        product.price.to_string()
    );
    if let (Some(original), Some(discount)) = (product.original_price, product.discount) {
        line.push_str(&format!("  was {original} (-{discount}%)"));
    }
    if product.is_new {
        line.push_str("  [NEW]");
    }
    if !product.in_stock {
        line.push_str("  [OUT OF STOCK]");
    }
    if state.is_in_wishlist(product.id) {
        line.push_str("  <3");
    }
    line
}

pub fn home(view: &HomeView<'_>, state: &StoreState) -> String {
    if view.loading {
        return "Loading products...".to_string();
    }

    let mut lines = Vec::new();
    if !view.on_sale.is_empty() {
        lines.push("On Sale".to_string());
        lines.extend(view.on_sale.iter().map(|p| product_line(p, state)));
        lines.push(String::new());
    }

    lines.push(view.heading().to_string());
    if let Some(message) = view.empty_message() {
        lines.push(message.to_string());
    }
    lines.extend(view.results.iter().map(|p| product_line(p, state)));
    lines.join("\n")
}

pub fn product_page(product: &Product, state: &StoreState) -> String {
    let mut lines = vec![if product.is_new {
        format!("{}  [NEW]", product.name)
    } else {
        product.name.clone()
    }];
    lines.push(format!("{} | rating {:.1}", product.category, product.rating));

    let mut price = product.price.to_string();
    if let Some(original) = product.original_price {
        price.push_str(&format!("  was {original}"));
    }
    if let (Some(savings), Some(discount)) = (product.savings(), product.discount) {
        price.push_str(&format!("  save {savings} ({discount}% off)"));
    }
    lines.push(price);

    lines.push(String::new());
    lines.push(product.description.clone());
    lines.push(String::new());
    lines.push(format!("Sizes: {}", product.sizes.join(" ")));
    lines.push(if product.in_stock {
        "In stock".to_string()
    } else {
        "Out of stock (use `hanami notify` to hear when it returns)".to_string()
    });

    let in_cart: Vec<&str> = state
        .cart
        .iter()
        .filter(|item| item.product_id() == product.id)
        .map(|item| item.size.as_str())
        .collect();
    if !in_cart.is_empty() {
        lines.push(format!("In your cart: {}", in_cart.join(", ")));
    }
    if state.is_in_wishlist(product.id) {
        lines.push("In your wishlist".to_string());
    }
    lines.join("\n")
}

fn cart_line(item: &CartItem) -> String {
    format!(
        "{:>3}  {:<26} {:<4} {:>3} x {:>8} = {:>9}",
        item.product_id(),
        item.product.name,
        item.size,
        item.quantity,
        item.product.price.to_string(),
        item.line_total().to_string()
    )
}

pub fn cart(state: &StoreState) -> String {
    if state.cart.is_empty() {
        return EMPTY_CART.to_string();
    }

    let mut lines = vec![format!(
        "Shopping Cart ({} items)",
        cart_item_count(&state.cart)
    )];
    lines.extend(state.cart.iter().map(cart_line));
    lines.push(format!("Total Amount: {}", cart_total(&state.cart)));
    lines.join("\n")
}

/// Wishlisted products that are in the loaded listing, in wishlist order.
///
/// IDs with no listing entry are shown bare.
pub fn wishlist(state: &StoreState) -> String {
    if state.wishlist.is_empty() {
        return EMPTY_WISHLIST.to_string();
    }

    let mut lines = vec!["Wishlist".to_string()];
    lines.extend(state.wishlist.iter().map(|&id| {
        state
            .product(id)
            .map_or_else(|| format!("{id:>3}"), |p| product_line(p, state))
    }));
    lines.join("\n")
}

pub fn order(confirmation: &OrderConfirmation) -> String {
    format!(
        "Order placed!\n{}\nOrder {} ({} items) at {}",
        confirmation.message(),
        confirmation.id,
        confirmation.item_count,
        confirmation.placed_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}
