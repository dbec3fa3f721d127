//! Status enums for orders, drivers, and delivery runs.
//!
//! The enums here are the pure state vocabulary; the transition rules that
//! guard them live in the `market` crate next to the data they mutate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a status from its wire name fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} status: {value}")]
pub struct ParseStatusError {
    /// Which status enum was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Customer-facing order status.
///
/// Progresses strictly forward (`preparing` through `delivered`);
/// `cancelled` is a terminal escape reachable only from `preparing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Preparing,
    Picked,
    OnTheWay,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// The next status in the forward progression, if any.
    ///
    /// Terminal statuses (`delivered`, `cancelled`) have no successor.
    #[must_use]
    pub const fn successor(self) -> Option<Self> {
        match self {
            Self::Preparing => Some(Self::Picked),
            Self::Picked => Some(Self::OnTheWay),
            Self::OnTheWay => Some(Self::Delivered),
            Self::Delivered | Self::Cancelled => None,
        }
    }

    /// Whether no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// The kebab-case wire name, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preparing => "preparing",
            Self::Picked => "picked",
            Self::OnTheWay => "on-the-way",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preparing" => Ok(Self::Preparing),
            "picked" => Ok(Self::Picked),
            "on-the-way" => Ok(Self::OnTheWay),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseStatusError {
                kind: "order",
                value: s.to_owned(),
            }),
        }
    }
}

/// Driver availability status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    #[default]
    Offline,
    Online,
    Busy,
}

impl DriverStatus {
    /// The snake_case wire name, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::Online => "online",
            Self::Busy => "busy",
        }
    }
}

impl std::fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DriverStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "offline" => Ok(Self::Offline),
            "online" => Ok(Self::Online),
            "busy" => Ok(Self::Busy),
            _ => Err(ParseStatusError {
                kind: "driver",
                value: s.to_owned(),
            }),
        }
    }
}

/// Step in a driver's delivery run.
///
/// The driver-side progression is a four-step variant of the order
/// lifecycle: accept, arrive at the store, collect the order, deliver it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryStep {
    #[default]
    Accept,
    ArrivedAtStore,
    PickedUp,
    Delivered,
}

impl DeliveryStep {
    /// The next step in the run, if any.
    #[must_use]
    pub const fn successor(self) -> Option<Self> {
        match self {
            Self::Accept => Some(Self::ArrivedAtStore),
            Self::ArrivedAtStore => Some(Self::PickedUp),
            Self::PickedUp => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }

    /// The kebab-case wire name, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::ArrivedAtStore => "arrived-at-store",
            Self::PickedUp => "picked-up",
            Self::Delivered => "delivered",
        }
    }
}

impl std::fmt::Display for DeliveryStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_progression_is_strictly_forward() {
        assert_eq!(OrderStatus::Preparing.successor(), Some(OrderStatus::Picked));
        assert_eq!(OrderStatus::Picked.successor(), Some(OrderStatus::OnTheWay));
        assert_eq!(
            OrderStatus::OnTheWay.successor(),
            Some(OrderStatus::Delivered)
        );
        assert_eq!(OrderStatus::Delivered.successor(), None);
        assert_eq!(OrderStatus::Cancelled.successor(), None);
    }

    #[test]
    fn terminal_statuses_are_exactly_the_ones_without_a_successor() {
        for status in [
            OrderStatus::Preparing,
            OrderStatus::Picked,
            OrderStatus::OnTheWay,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.is_terminal(), status.successor().is_none());
        }
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Preparing.is_terminal());
    }

    #[test]
    fn order_status_wire_names_round_trip() {
        for status in [
            OrderStatus::Preparing,
            OrderStatus::Picked,
            OrderStatus::OnTheWay,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }

        let err = "shipped".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.to_string(), "unknown order status: shipped");
    }

    #[test]
    fn order_status_serializes_kebab_case() {
        let json = serde_json::to_string(&OrderStatus::OnTheWay).unwrap();
        assert_eq!(json, "\"on-the-way\"");
    }

    #[test]
    fn delivery_run_ends_at_delivered() {
        let mut step = DeliveryStep::Accept;
        let mut hops = 0;
        while let Some(next) = step.successor() {
            step = next;
            hops += 1;
        }
        assert_eq!(step, DeliveryStep::Delivered);
        assert_eq!(hops, 3);
    }
}
