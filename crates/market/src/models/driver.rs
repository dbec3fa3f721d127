//! Driver domain type.

use serde::{Deserialize, Serialize};

use quickdash_core::{DriverId, DriverStatus, GeoPoint, OrderId};

/// A delivery driver.
///
/// `active_order_id`, when set, references exactly one in-progress order.
/// The [`Dispatcher`](crate::dispatch::Dispatcher) owns that invariant:
/// clearing the reference always comes with a return to `online` and a
/// `total_deliveries` increment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    /// Unique driver ID.
    pub id: DriverId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Vehicle description, e.g. "Motorcycle".
    pub vehicle: String,
    /// License plate.
    pub vehicle_number: String,
    /// Avatar URL.
    pub image: String,
    /// Availability status.
    pub status: DriverStatus,
    /// Last reported position.
    pub current_location: GeoPoint,
    /// Average rating out of 5.
    pub rating: f64,
    /// Lifetime completed deliveries.
    pub total_deliveries: u32,
    /// The order currently being delivered, if any.
    #[serde(default)]
    pub active_order_id: Option<OrderId>,
}
