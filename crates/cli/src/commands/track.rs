//! Order tracking command.

use thiserror::Error;

use quickdash_market::orders::{TRACKING_STEPS, step_index};
use quickdash_market::{Order, fixtures};

/// Errors for the track command.
#[derive(Debug, Error)]
pub enum TrackError {
    /// No fixture order has the requested ID.
    #[error("order not found: {0}")]
    OrderNotFound(String),

    /// JSON output failed to serialize.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

fn find_order(id: &str) -> Option<Order> {
    std::iter::once(fixtures::active_order())
        .chain(fixtures::past_orders())
        .find(|order| order.id.as_str() == id)
}

/// Render the tracking stepper for an order, the way the customer tracking
/// screen does: steps at or before the current one are marked done.
#[allow(clippy::print_stdout)]
pub fn show(id: &str, json: bool) -> Result<(), TrackError> {
    let order = find_order(id).ok_or_else(|| TrackError::OrderNotFound(id.to_owned()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&order)?);
        return Ok(());
    }

    println!(
        "Order {} from {} — {}",
        order.id, order.store_name, order.status
    );
    // A status outside the step list (cancelled) marks nothing as done.
    let current = step_index(order.status);
    for (index, step) in TRACKING_STEPS.iter().enumerate() {
        let marker = if current.is_some_and(|c| index <= c) {
            "[x]"
        } else {
            "[ ]"
        };
        println!("  {marker} {}", step.label);
    }
    println!("  Total: {}", order.total);
    if order.status.is_terminal() {
        println!("  This order is {}.", order.status);
    } else {
        println!("  Deliver to: {}", order.delivery_address);
    }
    Ok(())
}
