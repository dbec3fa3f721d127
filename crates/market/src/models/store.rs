//! Store and product domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use quickdash_core::{CategoryId, ProductId, StoreId};

/// A storefront a customer can order from.
///
/// Immutable fixture data: stores are loaded once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    /// Unique store ID.
    pub id: StoreId,
    /// Display name, e.g. "Burger Station".
    pub name: String,
    /// Short type line shown under the name, e.g. "Fast Food • Burgers".
    #[serde(rename = "type")]
    pub kind: String,
    /// Hero image URL.
    pub image: String,
    /// Average customer rating out of 5.
    pub rating: f64,
    /// Typical delivery time in minutes.
    pub delivery_time_minutes: u32,
    /// Flat delivery fee; zero means free delivery.
    pub delivery_fee: Decimal,
    /// Whether the store appears in the featured/promo rail.
    #[serde(default)]
    pub featured: bool,
    /// Category the store is filed under.
    pub category: CategoryId,
    /// Products in display order.
    pub products: Vec<Product>,
}

impl Store {
    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }
}

/// A product offered by a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Owning store.
    pub store_id: StoreId,
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Unit price.
    pub price: Decimal,
    /// Image URL.
    pub image: String,
    /// Optional in-store category label, e.g. "dairy".
    #[serde(default)]
    pub category: Option<String>,
}
