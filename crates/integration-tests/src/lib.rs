//! Integration tests for QuickDash.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p quickdash-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Browse, cart, and checkout as one session
//! - `order_lifecycle` - Status machine and tracking across order lists
//! - `driver_flow` - Dispatch from going online to a completed delivery
//!
//! The helpers here build sessions preloaded from the fixture catalog so
//! individual tests stay focused on behavior.

#![cfg_attr(not(test), forbid(unsafe_code))]

use quickdash_core::{ProductId, StoreId};
use quickdash_market::{Catalog, Session, fixtures};

/// A session together with the catalog it browses.
pub struct TestSession {
    pub catalog: Catalog,
    pub session: Session,
}

impl TestSession {
    /// Fresh session over the fixture catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: fixtures::catalog(),
            session: Session::new(),
        }
    }

    /// Add a fixture product to the cart, panicking if the fixture is
    /// missing (a test wiring error, not a behavior under test).
    pub fn add_to_cart(&mut self, store_id: &str, product_id: &str) {
        let product = self
            .catalog
            .product(&StoreId::new(store_id), &ProductId::new(product_id))
            .expect("fixture product exists")
            .clone();
        self.session.cart_mut().add_product(&product);
    }
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}
