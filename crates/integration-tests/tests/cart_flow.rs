//! Browse-to-checkout flow: category filter, search precedence, cart
//! aggregation, and placing an order from the cart.

use rust_decimal::Decimal;

use quickdash_core::{CategoryId, OrderStatus, ProductId, StoreId};
use quickdash_integration_tests::TestSession;
use quickdash_market::fixtures;

#[test]
fn browse_filter_then_search_then_add_to_cart() {
    let mut ts = TestSession::new();

    // Category filter narrows the store list.
    ts.session.set_active_category(CategoryId::new("grocery"));
    let visible = ts.session.visible_stores(&ts.catalog);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Fresh Basket Grocery");

    // A search term takes over regardless of category.
    ts.session.set_search_term("pet");
    let visible = ts.session.visible_stores(&ts.catalog);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Pawsome Pet Supplies");

    // Clearing the search restores the category view.
    ts.session.clear_search();
    assert_eq!(ts.session.visible_stores(&ts.catalog).len(), 1);

    ts.add_to_cart("store1", "prod1");
    ts.add_to_cart("store1", "prod1");
    ts.add_to_cart("store1", "prod2");
    assert_eq!(ts.session.cart().total_items(), 3);
    assert_eq!(ts.session.cart().items().len(), 2);
}

#[test]
fn checkout_produces_a_trackable_preparing_order() {
    let mut ts = TestSession::new();
    let user = fixtures::user();

    ts.add_to_cart("store1", "prod1");
    ts.add_to_cart("store1", "prod2");
    ts.add_to_cart("store1", "prod2");

    let order = ts
        .session
        .place_order(&ts.catalog, &StoreId::new("store1"), &user)
        .expect("cart has lines for store1");

    assert_eq!(order.status, OrderStatus::Preparing);
    assert_eq!(order.total, Decimal::new(1299, 2));
    assert_eq!(order.items_total(), order.total);
    assert_eq!(
        quickdash_market::orders::step_index(order.status),
        Some(0),
        "a fresh order sits on the first tracking step"
    );
    assert!(ts.session.cart().is_empty());
}

#[test]
fn checkout_only_drains_the_ordered_store() {
    let mut ts = TestSession::new();
    let user = fixtures::user();

    ts.add_to_cart("store1", "prod1");
    ts.add_to_cart("store2", "prod5");

    ts.session
        .place_order(&ts.catalog, &StoreId::new("store1"), &user)
        .expect("store1 checkout");

    let cart = ts.session.cart();
    assert_eq!(cart.total_items(), 1);
    assert_eq!(cart.items_for_store(&StoreId::new("store2")).len(), 1);
    assert!(cart.items_for_store(&StoreId::new("store1")).is_empty());
}

#[test]
fn cart_survives_quantity_edits_from_the_store_page() {
    let mut ts = TestSession::new();

    ts.add_to_cart("store2", "prod5");
    ts.add_to_cart("store2", "prod6");

    let cart = ts.session.cart_mut();
    cart.update_quantity(&ProductId::new("prod5"), 4);
    cart.update_quantity(&ProductId::new("prod6"), 0);

    assert_eq!(cart.total_items(), 4);
    // 8.99 * 4
    assert_eq!(cart.total_price(), Decimal::new(3596, 2));
}
