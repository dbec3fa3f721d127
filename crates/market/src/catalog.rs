//! Store catalog: category filtering and free-text search.
//!
//! Pure queries over an immutable store list. Search lowercases and trims the
//! query; an empty term matches everything, mirroring the browse view where a
//! cleared search box falls back to the category filter.

use serde::{Deserialize, Serialize};

use quickdash_core::{CategoryId, ProductId, StoreId};

use crate::models::{Product, Store};

/// A browse category shown in the home-screen rail.
///
/// A flat lookup table, not a hierarchy: ID, display name, and the icon the
/// UI maps to a glyph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category ID; `all` is the sentinel that matches every store.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Icon name for the presentation layer, e.g. "shopping-basket".
    pub icon: String,
}

/// The store catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    stores: Vec<Store>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from fixture data.
    #[must_use]
    pub const fn new(stores: Vec<Store>, categories: Vec<Category>) -> Self {
        Self { stores, categories }
    }

    /// Every store, in fixture order.
    #[must_use]
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// The category rail, in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a store by ID.
    #[must_use]
    pub fn store(&self, id: &StoreId) -> Option<&Store> {
        self.stores.iter().find(|s| &s.id == id)
    }

    /// Look up a product within a store.
    #[must_use]
    pub fn product(&self, store_id: &StoreId, product_id: &ProductId) -> Option<&Product> {
        self.store(store_id)?.product(product_id)
    }

    /// Stores filed under the given category.
    ///
    /// The `all` sentinel returns every store.
    #[must_use]
    pub fn stores_by_category(&self, category: &CategoryId) -> Vec<&Store> {
        if category.is_all() {
            return self.stores.iter().collect();
        }
        self.stores
            .iter()
            .filter(|store| &store.category == category)
            .collect()
    }

    /// Case-insensitive substring search over store name and type line.
    ///
    /// An empty or whitespace-only term returns every store.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&Store> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.stores.iter().collect();
        }
        self.stores
            .iter()
            .filter(|store| {
                store.name.to_lowercase().contains(&term)
                    || store.kind.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Stores flagged for the featured/promo rail.
    #[must_use]
    pub fn featured_stores(&self) -> Vec<&Store> {
        self.stores.iter().filter(|store| store.featured).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn all_sentinel_returns_every_store() {
        let catalog = fixtures::catalog();
        let all = catalog.stores_by_category(&CategoryId::new("all"));
        assert_eq!(all.len(), catalog.stores().len());
    }

    #[test]
    fn category_filter_returns_exact_matches() {
        let catalog = fixtures::catalog();
        let pharmacies = catalog.stores_by_category(&CategoryId::new("pharmacy"));
        assert_eq!(pharmacies.len(), 1);
        assert_eq!(pharmacies[0].name, "MediQuick Pharmacy");
    }

    #[test]
    fn unknown_category_yields_empty_not_error() {
        let catalog = fixtures::catalog();
        assert!(catalog.stores_by_category(&CategoryId::new("hardware")).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = fixtures::catalog();
        let hits = catalog.search("burger");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Burger Station");

        let hits = catalog.search("BURGER");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn search_matches_type_line_too() {
        let catalog = fixtures::catalog();
        let hits = catalog.search("healthcare");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "MediQuick Pharmacy");
    }

    #[test]
    fn empty_search_returns_everything() {
        let catalog = fixtures::catalog();
        assert_eq!(catalog.search("").len(), catalog.stores().len());
        assert_eq!(catalog.search("   ").len(), catalog.stores().len());
    }

    #[test]
    fn featured_stores_respect_the_flag() {
        let catalog = fixtures::catalog();
        let featured = catalog.featured_stores();
        assert!(!featured.is_empty());
        assert!(featured.iter().all(|s| s.featured));
    }

    #[test]
    fn store_and_product_lookup_miss_is_none() {
        let catalog = fixtures::catalog();
        assert!(catalog.store(&StoreId::new("store99")).is_none());
        assert!(
            catalog
                .product(&StoreId::new("store1"), &ProductId::new("prod99"))
                .is_none()
        );
        assert!(
            catalog
                .product(&StoreId::new("store1"), &ProductId::new("prod1"))
                .is_some()
        );
    }
}
