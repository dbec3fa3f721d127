//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use quickdash_core::{GeoPoint, OrderId, OrderStatus, ProductId, StoreId};

/// A customer order.
///
/// Carries a denormalized store name/image so the tracking UI can render
/// without a catalog lookup. Status transitions go through
/// [`Order::advance`](crate::orders) and [`Order::cancel`](crate::orders);
/// the field itself is never written directly outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Store the order was placed with.
    pub store_id: StoreId,
    /// Store display name at order time.
    pub store_name: String,
    /// Store image URL at order time.
    pub store_image: String,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Line items in the order they were added.
    pub items: Vec<OrderLine>,
    /// Order total.
    pub total: Decimal,
    /// Where the order is delivered.
    pub delivery_address: String,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// Promised delivery time.
    pub estimated_delivery: DateTime<Utc>,
    /// Live tracking data, present once a courier is moving.
    #[serde(default)]
    pub tracking: Option<TrackingInfo>,
}

impl Order {
    /// Sum of line totals.
    ///
    /// The stored [`total`](Self::total) is authoritative (it may include
    /// fees); this recomputes just the item portion.
    #[must_use]
    pub fn items_total(&self) -> Decimal {
        self.items.iter().map(OrderLine::line_total).sum()
    }
}

/// A single line in an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product the line refers to.
    pub id: ProductId,
    /// Product name at order time.
    pub name: String,
    /// Units ordered, always at least 1.
    pub quantity: u32,
    /// Unit price at order time.
    pub price: Decimal,
}

impl OrderLine {
    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Live tracking data for an in-flight order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingInfo {
    /// Last reported courier position.
    pub current_location: GeoPoint,
    /// Contact card for the courier, once assigned.
    #[serde(default)]
    pub courier: Option<CourierContact>,
}

/// Contact details for the delivery executive on an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierContact {
    /// Courier display name.
    pub name: String,
    /// Phone number for the call/message buttons.
    pub phone: String,
    /// Avatar URL.
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn order_wire_shape_uses_kebab_status_and_string_decimals() {
        let order = fixtures::active_order();
        let json = serde_json::to_value(&order).expect("order serializes");

        assert_eq!(json["id"], "order1");
        assert_eq!(json["status"], "on-the-way");
        assert_eq!(json["total"], "12.99");
        assert_eq!(json["items"][0]["quantity"], 1);
        assert_eq!(json["items"][1]["price"], "4.50");
        assert!(json["tracking"]["courier"].is_object());

        let parsed: Order = serde_json::from_value(json).expect("order parses back");
        assert_eq!(parsed.status, quickdash_core::OrderStatus::OnTheWay);
        assert_eq!(parsed.total, order.total);
    }

    #[test]
    fn tracking_field_is_optional_on_the_wire() {
        let order = fixtures::past_orders().remove(0);
        let json = serde_json::to_value(&order).expect("order serializes");
        assert!(json["tracking"].is_null());
    }
}
