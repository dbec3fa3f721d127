//! Store browsing commands.

use thiserror::Error;

use quickdash_core::{CategoryId, StoreId};
use quickdash_market::{Session, fixtures};

/// Errors for browse commands.
#[derive(Debug, Error)]
pub enum BrowseError {
    /// The requested store is not in the catalog.
    #[error("store not found: {0}")]
    StoreNotFound(String),

    /// JSON output failed to serialize.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// List stores the way the home screen would: a non-empty search term wins,
/// otherwise the category filter applies.
#[allow(clippy::print_stdout)]
pub fn list_stores(
    category: Option<&str>,
    search: Option<&str>,
    json: bool,
) -> Result<(), BrowseError> {
    let catalog = fixtures::catalog();
    let mut session = Session::new();
    if let Some(category) = category {
        session.set_active_category(CategoryId::new(category));
    }
    if let Some(search) = search {
        session.set_search_term(search);
    }

    let stores = session.visible_stores(&catalog);
    if json {
        println!("{}", serde_json::to_string_pretty(&stores)?);
        return Ok(());
    }

    if stores.is_empty() {
        println!("No stores found.");
        return Ok(());
    }
    for store in stores {
        println!(
            "{:<8} {:<22} {:<24} ★{:<4} {} min  fee {}",
            store.id.as_str(),
            store.name,
            store.kind,
            store.rating,
            store.delivery_time_minutes,
            store.delivery_fee
        );
    }
    Ok(())
}

/// Show one store with its product list.
#[allow(clippy::print_stdout)]
pub fn show_store(id: &str, json: bool) -> Result<(), BrowseError> {
    let catalog = fixtures::catalog();
    let store = catalog
        .store(&StoreId::new(id))
        .ok_or_else(|| BrowseError::StoreNotFound(id.to_owned()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(store)?);
        return Ok(());
    }

    println!("{} — {} (★{})", store.name, store.kind, store.rating);
    for product in &store.products {
        println!(
            "  {:<8} {:<28} {}",
            product.id.as_str(),
            product.name,
            product.price
        );
    }
    Ok(())
}
