//! Geographic coordinates for mock tracking data.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair.
///
/// Purely presentational in this system: tracking fixtures carry a point the
/// UI can pin on a map. No geodesic math happens here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl GeoPoint {
    /// Create a new point.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
