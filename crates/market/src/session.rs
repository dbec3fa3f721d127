//! Per-session customer state: cart, active filters, checkout.
//!
//! One `Session` per customer per process - explicit init, no teardown, no
//! sharing. The browse precedence rule lives here: a non-empty search term
//! overrides the category filter entirely.

use chrono::{Duration, Utc};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use quickdash_core::{CategoryId, OrderId, OrderStatus, StoreId};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::models::{Order, OrderLine, Store, User};

/// Error for checkout preconditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The cart holds nothing for the requested store.
    #[error("cart has no items for store {0}")]
    EmptyCart(StoreId),

    /// The store is not in the catalog.
    #[error("unknown store: {0}")]
    UnknownStore(StoreId),
}

/// A customer session.
#[derive(Debug, Clone)]
pub struct Session {
    cart: Cart,
    active_category: CategoryId,
    search_term: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Start a session: empty cart, `all` category, no search term.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cart: Cart::new(),
            active_category: CategoryId::new(CategoryId::ALL),
            search_term: String::new(),
        }
    }

    /// The session cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable access to the session cart.
    pub const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// The category the browse view is filtered to.
    #[must_use]
    pub const fn active_category(&self) -> &CategoryId {
        &self.active_category
    }

    /// Switch the active category.
    pub fn set_active_category(&mut self, category: CategoryId) {
        self.active_category = category;
    }

    /// The current search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Set the search term. While non-empty it takes precedence over the
    /// category filter.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Clear the search term, returning the browse view to the category
    /// filter.
    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    /// The stores the browse view should show right now.
    ///
    /// A non-empty search term wins; otherwise the active category applies.
    #[must_use]
    pub fn visible_stores<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Store> {
        if self.search_term.trim().is_empty() {
            catalog.stores_by_category(&self.active_category)
        } else {
            catalog.search(&self.search_term)
        }
    }

    /// Place an order for this store's cart lines.
    ///
    /// Builds a `preparing` order from the cart's lines for the store -
    /// fresh ID, total from the lines, the user's default address, ETA
    /// derived from the store's delivery time - and removes those lines
    /// from the cart.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::UnknownStore`] if the store is not in the catalog.
    /// - [`CheckoutError::EmptyCart`] if the cart holds nothing for it.
    pub fn place_order(
        &mut self,
        catalog: &Catalog,
        store_id: &StoreId,
        user: &User,
    ) -> Result<Order, CheckoutError> {
        let store = catalog
            .store(store_id)
            .ok_or_else(|| CheckoutError::UnknownStore(store_id.clone()))?;

        let lines: Vec<OrderLine> = self
            .cart
            .items_for_store(store_id)
            .into_iter()
            .map(|item| OrderLine {
                id: item.id.clone(),
                name: item.name.clone(),
                quantity: item.quantity,
                price: item.price,
            })
            .collect();
        if lines.is_empty() {
            return Err(CheckoutError::EmptyCart(store_id.clone()));
        }

        let total = lines.iter().map(OrderLine::line_total).sum();
        let created_at = Utc::now();
        let order = Order {
            id: OrderId::new(format!("order-{}", Uuid::new_v4())),
            store_id: store.id.clone(),
            store_name: store.name.clone(),
            store_image: store.image.clone(),
            status: OrderStatus::Preparing,
            items: lines,
            total,
            delivery_address: user
                .default_address()
                .map(|a| a.address.clone())
                .unwrap_or_default(),
            created_at,
            estimated_delivery: created_at
                + Duration::minutes(i64::from(store.delivery_time_minutes)),
            tracking: None,
        };

        self.cart.remove_store_items(store_id);
        info!(order = %order.id, store = %store.id, total = %order.total, "order placed");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use rust_decimal::Decimal;

    #[test]
    fn session_starts_on_the_all_category_with_an_empty_cart() {
        let session = Session::new();
        assert!(session.cart().is_empty());
        assert!(session.active_category().is_all());
        assert_eq!(session.search_term(), "");
    }

    #[test]
    fn search_term_overrides_category_while_non_empty() {
        let catalog = fixtures::catalog();
        let mut session = Session::new();
        session.set_active_category(CategoryId::new("pharmacy"));

        session.set_search_term("burger");
        let visible = session.visible_stores(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Burger Station");

        session.clear_search();
        let visible = session.visible_stores(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "MediQuick Pharmacy");
    }

    #[test]
    fn place_order_builds_a_preparing_order_and_drains_the_store_lines() {
        let catalog = fixtures::catalog();
        let user = fixtures::user();
        let mut session = Session::new();

        let store_id = StoreId::new("store1");
        let bananas = catalog
            .product(&store_id, &quickdash_core::ProductId::new("prod1"))
            .expect("fixture product");
        let milk = catalog
            .product(&store_id, &quickdash_core::ProductId::new("prod2"))
            .expect("fixture product");
        session.cart_mut().add_product(bananas);
        session.cart_mut().add_product(milk);
        session.cart_mut().add_product(milk);

        // A line from another store survives checkout.
        let fries = catalog
            .product(&StoreId::new("store2"), &quickdash_core::ProductId::new("prod6"))
            .expect("fixture product");
        session.cart_mut().add_product(fries);

        let order = session
            .place_order(&catalog, &store_id, &user)
            .expect("cart has store1 lines");

        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.items.len(), 2);
        // 3.99 + 4.50 * 2
        assert_eq!(order.total, Decimal::new(1299, 2));
        assert_eq!(order.delivery_address, user.default_address().map(|a| a.address.clone()).unwrap_or_default());
        assert!(order.estimated_delivery > order.created_at);

        assert!(session.cart().items_for_store(&store_id).is_empty());
        assert_eq!(session.cart().total_items(), 1);
    }

    #[test]
    fn place_order_preconditions() {
        let catalog = fixtures::catalog();
        let user = fixtures::user();
        let mut session = Session::new();

        assert_eq!(
            session
                .place_order(&catalog, &StoreId::new("store1"), &user)
                .unwrap_err(),
            CheckoutError::EmptyCart(StoreId::new("store1"))
        );
        assert_eq!(
            session
                .place_order(&catalog, &StoreId::new("store99"), &user)
                .unwrap_err(),
            CheckoutError::UnknownStore(StoreId::new("store99"))
        );
    }
}
