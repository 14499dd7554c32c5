//! The pure state transition function.

use hanami_core::{CartItem, Product, ProductId};

use super::action::StoreAction;
use super::state::StoreState;

/// Compute the state that follows `state` once `action` is applied.
///
/// The transition is total and side-effect free: it never fails, never
/// touches storage, and returns a fresh snapshot. Vacuous actions (removing a
/// product that is not in the cart) and [`StoreAction::Unrecognized`] return
/// an unchanged copy.
#[must_use]
pub fn transition(state: &StoreState, action: &StoreAction) -> StoreState {
    let mut next = state.clone();
    match action {
        StoreAction::SetProducts(products) => next.products.clone_from(products),
        StoreAction::SetLoading(loading) => next.loading = *loading,
        StoreAction::AddToCart { product, size } => add_to_cart(&mut next.cart, product, size),
        StoreAction::RemoveFromCart(id) => next.cart.retain(|item| item.product_id() != *id),
        StoreAction::RemoveCartLine { product_id, size } => {
            next.cart.retain(|item| !item.is_line(*product_id, size));
        }
        StoreAction::UpdateQuantity {
            product_id,
            quantity,
        } => update_quantity(&mut next.cart, *product_id, *quantity),
        StoreAction::ClearCart => next.cart.clear(),
        StoreAction::ToggleWishlist(id) => toggle_wishlist(&mut next.wishlist, *id),
        StoreAction::SetSearchQuery(query) => next.search_query.clone_from(query),
        StoreAction::LoadCart(items) => next.cart = normalize_cart(items),
        StoreAction::LoadWishlist(ids) => next.wishlist = dedup_ids(ids),
        StoreAction::Unrecognized => {}
    }
    next
}

fn add_to_cart(cart: &mut Vec<CartItem>, product: &Product, size: &str) {
    if let Some(item) = cart.iter_mut().find(|item| item.is_line(product.id, size)) {
        item.quantity = item.quantity.saturating_add(1);
    } else {
        cart.push(CartItem::new(product.clone(), size));
    }
}

// Lines are matched by product id alone, so every size of the product
// receives the same quantity.
fn update_quantity(cart: &mut Vec<CartItem>, product_id: ProductId, quantity: i64) {
    let quantity = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
    for item in cart.iter_mut().filter(|item| item.product_id() == product_id) {
        item.quantity = quantity;
    }
    cart.retain(|item| item.quantity > 0);
}

fn toggle_wishlist(wishlist: &mut Vec<ProductId>, id: ProductId) {
    if let Some(pos) = wishlist.iter().position(|&existing| existing == id) {
        wishlist.remove(pos);
    } else {
        wishlist.push(id);
    }
}

/// Merge duplicate `(id, size)` lines by summing quantities and drop empty
/// lines, keeping first-seen order.
fn normalize_cart(items: &[CartItem]) -> Vec<CartItem> {
    let mut cart: Vec<CartItem> = Vec::with_capacity(items.len());
    for item in items.iter().filter(|item| item.quantity > 0) {
        match cart
            .iter_mut()
            .find(|line| line.is_line(item.product_id(), &item.size))
        {
            Some(line) => line.quantity = line.quantity.saturating_add(item.quantity),
            None => cart.push(item.clone()),
        }
    }
    cart
}

fn dedup_ids(ids: &[ProductId]) -> Vec<ProductId> {
    let mut wishlist = Vec::with_capacity(ids.len());
    for &id in ids {
        if !wishlist.contains(&id) {
            wishlist.push(id);
        }
    }
    wishlist
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use hanami_core::Price;

    use super::*;

    fn product(id: i32, name: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::from_cents(cents),
            original_price: None,
            image: format!("https://images.example.com/{id}.jpg"),
            category: "Tops".to_string(),
            rating: 4.0,
            is_new: false,
            in_stock: true,
            description: String::new(),
            sizes: vec!["S".to_string(), "M".to_string(), "L".to_string()],
            discount: None,
        }
    }

    fn add(state: &StoreState, product: &Product, size: &str) -> StoreState {
        transition(
            state,
            &StoreAction::AddToCart {
                product: product.clone(),
                size: size.to_string(),
            },
        )
    }

    #[test]
    fn test_set_products_and_loading() {
        let products = vec![product(1, "Dress", 8999), product(2, "Kimono", 15600)];
        let state = transition(
            &StoreState::default(),
            &StoreAction::SetProducts(products.clone()),
        );
        assert_eq!(state.products, products);

        let state = transition(&state, &StoreAction::SetLoading(true));
        assert!(state.loading);
        let state = transition(&state, &StoreAction::SetProducts(Vec::new()));
        assert!(state.products.is_empty());
        assert!(state.loading);
    }

    #[test]
    fn test_add_same_line_twice_merges() {
        let dress = product(1, "Dress", 8999);
        let state = add(&StoreState::default(), &dress, "M");
        let state = add(&state, &dress, "M");

        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart[0].quantity, 2);
    }

    #[test]
    fn test_add_other_size_appends_new_line() {
        let dress = product(1, "Dress", 8999);
        let tee = product(3, "Tee", 4500);
        let state = add(&StoreState::default(), &dress, "M");
        let state = add(&state, &tee, "S");
        let state = add(&state, &dress, "L");
        let state = add(&state, &dress, "M");

        let lines: Vec<_> = state
            .cart
            .iter()
            .map(|item| (item.product_id().as_i32(), item.size.as_str(), item.quantity))
            .collect();
        assert_eq!(lines, vec![(1, "M", 2), (3, "S", 1), (1, "L", 1)]);
    }

    #[test]
    fn test_cart_line_is_a_snapshot() {
        let mut dress = product(1, "Dress", 8999);
        let state = add(&StoreState::default(), &dress, "M");

        dress.price = Price::from_cents(1);
        let state = add(&state, &dress, "M");

        assert_eq!(state.cart[0].product.price, Price::from_cents(8999));
        assert_eq!(state.cart[0].quantity, 2);
    }

    #[test]
    fn test_remove_from_cart_removes_every_size() {
        let dress = product(1, "Dress", 8999);
        let tee = product(3, "Tee", 4500);
        let state = add(&StoreState::default(), &dress, "M");
        let state = add(&state, &dress, "L");
        let state = add(&state, &tee, "S");

        let state = transition(&state, &StoreAction::RemoveFromCart(ProductId::new(1)));
        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart[0].product_id(), ProductId::new(3));
    }

    #[test]
    fn test_remove_cart_line_keeps_other_sizes() {
        let dress = product(1, "Dress", 8999);
        let state = add(&StoreState::default(), &dress, "M");
        let state = add(&state, &dress, "L");

        let state = transition(
            &state,
            &StoreAction::RemoveCartLine {
                product_id: ProductId::new(1),
                size: "M".to_string(),
            },
        );
        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart[0].size, "L");
    }

    #[test]
    fn test_remove_absent_product_is_noop() {
        let dress = product(1, "Dress", 8999);
        let state = add(&StoreState::default(), &dress, "M");
        let next = transition(&state, &StoreAction::RemoveFromCart(ProductId::new(99)));
        assert_eq!(next, state);
    }

    #[test]
    fn test_update_quantity_applies_to_all_sizes() {
        let dress = product(1, "Dress", 8999);
        let tee = product(3, "Tee", 4500);
        let state = add(&StoreState::default(), &dress, "M");
        let state = add(&state, &dress, "L");
        let state = add(&state, &tee, "S");

        let state = transition(
            &state,
            &StoreAction::UpdateQuantity {
                product_id: ProductId::new(1),
                quantity: 4,
            },
        );
        let quantities: Vec<u32> = state.cart.iter().map(|item| item.quantity).collect();
        assert_eq!(quantities, vec![4, 4, 1]);
    }

    #[test]
    fn test_update_quantity_to_zero_or_below_removes_lines() {
        let dress = product(1, "Dress", 8999);
        let tee = product(3, "Tee", 4500);
        let state = add(&StoreState::default(), &dress, "M");
        let state = add(&state, &dress, "L");
        let state = add(&state, &tee, "S");

        let zeroed = transition(
            &state,
            &StoreAction::UpdateQuantity {
                product_id: ProductId::new(1),
                quantity: 0,
            },
        );
        assert_eq!(zeroed.cart.len(), 1);
        assert!(!zeroed.is_in_cart(ProductId::new(1)));

        let negative = transition(
            &state,
            &StoreAction::UpdateQuantity {
                product_id: ProductId::new(3),
                quantity: -2,
            },
        );
        assert!(!negative.is_in_cart(ProductId::new(3)));
        assert_eq!(negative.cart.len(), 2);
    }

    #[test]
    fn test_clear_cart_keeps_wishlist() {
        let dress = product(1, "Dress", 8999);
        let state = add(&StoreState::default(), &dress, "M");
        let state = transition(&state, &StoreAction::ToggleWishlist(ProductId::new(2)));
        let state = transition(&state, &StoreAction::ClearCart);

        assert!(state.cart.is_empty());
        assert_eq!(state.wishlist, vec![ProductId::new(2)]);
    }

    #[test]
    fn test_toggle_wishlist_twice_restores_membership() {
        let start = transition(
            &StoreState::default(),
            &StoreAction::ToggleWishlist(ProductId::new(5)),
        );
        for id in [1, 5, 9] {
            let id = ProductId::new(id);
            let once = transition(&start, &StoreAction::ToggleWishlist(id));
            let twice = transition(&once, &StoreAction::ToggleWishlist(id));
            assert_ne!(once.is_in_wishlist(id), start.is_in_wishlist(id));
            assert_eq!(twice.is_in_wishlist(id), start.is_in_wishlist(id));
        }
    }

    #[test]
    fn test_toggle_wishlist_appends_in_order() {
        let state = [4, 1, 6].into_iter().fold(StoreState::default(), |s, id| {
            transition(&s, &StoreAction::ToggleWishlist(ProductId::new(id)))
        });
        assert_eq!(
            state.wishlist,
            vec![ProductId::new(4), ProductId::new(1), ProductId::new(6)]
        );
    }

    #[test]
    fn test_set_search_query() {
        let state = transition(
            &StoreState::default(),
            &StoreAction::SetSearchQuery("Dress".to_string()),
        );
        assert_eq!(state.search_query, "Dress");
    }

    #[test]
    fn test_unrecognized_is_noop() {
        let dress = product(1, "Dress", 8999);
        let state = add(&StoreState::default(), &dress, "M");
        assert_eq!(transition(&state, &StoreAction::Unrecognized), state);
    }

    #[test]
    fn test_transition_leaves_input_untouched() {
        let dress = product(1, "Dress", 8999);
        let before = add(&StoreState::default(), &dress, "M");
        let snapshot = before.clone();
        let _ = transition(&before, &StoreAction::ClearCart);
        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_load_cart_merges_duplicates_and_drops_empty_lines() {
        let dress = product(1, "Dress", 8999);
        let tee = product(3, "Tee", 4500);
        let items = vec![
            CartItem {
                quantity: 2,
                ..CartItem::new(dress.clone(), "M")
            },
            CartItem {
                quantity: 0,
                ..CartItem::new(tee, "S")
            },
            CartItem::new(dress, "M"),
        ];

        let state = transition(&StoreState::default(), &StoreAction::LoadCart(items));
        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart[0].quantity, 3);
    }

    #[test]
    fn test_load_wishlist_drops_duplicates() {
        let ids = [2, 4, 2, 1].map(ProductId::new).to_vec();
        let state = transition(&StoreState::default(), &StoreAction::LoadWishlist(ids));
        assert_eq!(
            state.wishlist,
            vec![ProductId::new(2), ProductId::new(4), ProductId::new(1)]
        );
    }
}
