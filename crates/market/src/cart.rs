//! Session cart with insert-or-increment aggregation.
//!
//! The cart is a `Vec` rather than a map so insertion order survives every
//! operation - the UI renders lines in the order the customer added them.
//! None of the operations can fail: unknown IDs are silent no-ops, and the
//! presentation layer never has to handle a cart error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use quickdash_core::{ProductId, StoreId};

use crate::models::Product;

/// A line in the cart. Quantity is always at least 1; setting it to zero
/// removes the line instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product the line refers to.
    pub id: ProductId,
    /// Store the product belongs to.
    pub store_id: StoreId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Product image URL.
    pub image: String,
    /// Units in the cart, >= 1.
    pub quantity: u32,
}

/// Description of a product being added to the cart - everything but the
/// quantity, which the cart derives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCartItem {
    /// Product ID.
    pub id: ProductId,
    /// Owning store.
    pub store_id: StoreId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Product image URL.
    pub image: String,
}

impl From<&Product> for NewCartItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            store_id: product.store_id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// The session cart.
///
/// Lives for one customer session; there is no persistence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// All lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a product to the cart.
    ///
    /// If a line with the same product ID exists its quantity goes up by 1;
    /// otherwise a new line is appended with quantity 1.
    pub fn add_item(&mut self, item: NewCartItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity += 1;
            debug!(product = %item.id, quantity = existing.quantity, "cart line incremented");
        } else {
            debug!(product = %item.id, "cart line added");
            self.items.push(CartItem {
                id: item.id,
                store_id: item.store_id,
                name: item.name,
                price: item.price,
                image: item.image,
                quantity: 1,
            });
        }
    }

    /// Convenience wrapper over [`add_item`](Self::add_item) for catalog
    /// products.
    pub fn add_product(&mut self, product: &Product) {
        self.add_item(NewCartItem::from(product));
    }

    /// Remove the line with the given product ID. No-op if absent.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.items.retain(|item| &item.id != id);
    }

    /// Set the quantity of a line.
    ///
    /// A quantity of 0 removes the line - zero is never stored. Unknown IDs
    /// are a silent no-op.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| &i.id == id) {
            item.quantity = quantity;
            debug!(product = %id, quantity, "cart quantity updated");
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        debug!(lines = self.items.len(), "cart cleared");
        self.items.clear();
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of price times quantity across all lines.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum()
    }

    /// The lines belonging to one store, insertion order preserved.
    #[must_use]
    pub fn items_for_store(&self, store_id: &StoreId) -> Vec<&CartItem> {
        self.items
            .iter()
            .filter(|item| &item.store_id == store_id)
            .collect()
    }

    /// Drop every line belonging to one store. Used after checkout.
    pub(crate) fn remove_store_items(&mut self, store_id: &StoreId) {
        self.items.retain(|item| &item.store_id != store_id);
    }
}
