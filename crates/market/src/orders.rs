//! Order lifecycle: the status state machine and customer tracking steps.
//!
//! Statuses move strictly forward one step at a time, driven by explicit
//! user action - there are no timers. `cancelled` is the one escape and only
//! exists while an order is still `preparing`. Illegal transitions are
//! rejected with [`TransitionError`] instead of silently overwriting status.

use thiserror::Error;
use tracing::{info, warn};

use quickdash_core::{OrderId, OrderStatus};

use crate::models::Order;

/// Error for illegal order status transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The order is in a terminal status and cannot move.
    #[error("order {order} is {status} and cannot advance")]
    Terminal {
        /// The order that was asked to move.
        order: OrderId,
        /// Its terminal status.
        status: OrderStatus,
    },

    /// Cancellation was requested after preparation finished.
    #[error("order {order} can only be cancelled while preparing (currently {status})")]
    CancelNotAllowed {
        /// The order that was asked to cancel.
        order: OrderId,
        /// Its current status.
        status: OrderStatus,
    },
}

impl Order {
    /// Advance the order one step along the forward progression.
    ///
    /// Returns the new status.
    ///
    /// # Errors
    ///
    /// [`TransitionError::Terminal`] if the order is already `delivered` or
    /// `cancelled`.
    pub fn advance(&mut self) -> Result<OrderStatus, TransitionError> {
        let next = self.status.successor().ok_or(TransitionError::Terminal {
            order: self.id.clone(),
            status: self.status,
        })?;
        info!(order = %self.id, from = %self.status, to = %next, "order status advanced");
        self.status = next;
        Ok(next)
    }

    /// Cancel the order.
    ///
    /// # Errors
    ///
    /// [`TransitionError::CancelNotAllowed`] unless the order is still
    /// `preparing`.
    pub fn cancel(&mut self) -> Result<(), TransitionError> {
        if self.status != OrderStatus::Preparing {
            return Err(TransitionError::CancelNotAllowed {
                order: self.id.clone(),
                status: self.status,
            });
        }
        info!(order = %self.id, "order cancelled");
        self.status = OrderStatus::Cancelled;
        Ok(())
    }
}

/// One entry in the customer-facing tracking stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingStep {
    /// The status this step represents.
    pub status: OrderStatus,
    /// Display label.
    pub label: &'static str,
    /// Icon name for the presentation layer.
    pub icon: &'static str,
}

/// The ordered customer tracking steps.
///
/// The UI renders every step at or before the current index as completed or
/// active, later ones as pending.
pub const TRACKING_STEPS: [TrackingStep; 4] = [
    TrackingStep {
        status: OrderStatus::Preparing,
        label: "Preparing Order",
        icon: "package",
    },
    TrackingStep {
        status: OrderStatus::Picked,
        label: "Order Picked Up",
        icon: "check-circle",
    },
    TrackingStep {
        status: OrderStatus::OnTheWay,
        label: "On The Way",
        icon: "bike",
    },
    TrackingStep {
        status: OrderStatus::Delivered,
        label: "Delivered",
        icon: "home",
    },
];

/// Locate a status in the tracking stepper.
///
/// `None` means the status has no step - `cancelled` orders have no position
/// on the progress bar. The caller renders nothing active in that case; a
/// warning is logged so a UI regression is visible.
#[must_use]
pub fn step_index(status: OrderStatus) -> Option<usize> {
    let index = TRACKING_STEPS.iter().position(|step| step.status == status);
    if index.is_none() {
        warn!(status = %status, "order status has no tracking step");
    }
    index
}

/// Filter an order list by status tab and free-text term.
///
/// The merchant dashboard shows orders under All/Preparing/Picked/Delivered
/// tabs with a search box over order IDs; both filters apply together. An
/// empty term matches everything.
#[must_use]
pub fn filter_orders<'a>(
    orders: &'a [Order],
    status: Option<OrderStatus>,
    term: &str,
) -> Vec<&'a Order> {
    let term = term.trim().to_lowercase();
    orders
        .iter()
        .filter(|order| status.is_none_or(|s| order.status == s))
        .filter(|order| term.is_empty() || order.id.as_str().to_lowercase().contains(&term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn orders_advance_through_the_full_progression() {
        let mut order = fixtures::available_orders().remove(0);
        assert_eq!(order.status, OrderStatus::Preparing);

        assert_eq!(order.advance(), Ok(OrderStatus::Picked));
        assert_eq!(order.advance(), Ok(OrderStatus::OnTheWay));
        assert_eq!(order.advance(), Ok(OrderStatus::Delivered));
        assert_eq!(
            order.advance(),
            Err(TransitionError::Terminal {
                order: order.id.clone(),
                status: OrderStatus::Delivered,
            })
        );
    }

    #[test]
    fn cancel_is_only_reachable_from_preparing() {
        let mut order = fixtures::available_orders().remove(0);
        order.advance().expect("preparing can advance");
        assert!(matches!(
            order.cancel(),
            Err(TransitionError::CancelNotAllowed { .. })
        ));

        let mut fresh = fixtures::available_orders().remove(0);
        fresh.cancel().expect("preparing can cancel");
        assert_eq!(fresh.status, OrderStatus::Cancelled);
        assert!(fresh.advance().is_err());
    }

    #[test]
    fn step_index_locates_statuses_in_the_stepper() {
        assert_eq!(step_index(OrderStatus::Preparing), Some(0));
        assert_eq!(step_index(OrderStatus::OnTheWay), Some(2));
        assert_eq!(step_index(OrderStatus::Delivered), Some(3));
        // Cancelled has no place on the progress bar.
        assert_eq!(step_index(OrderStatus::Cancelled), None);
    }

    #[test]
    fn filter_orders_combines_tab_and_term() {
        let orders = fixtures::available_orders();

        let preparing = filter_orders(&orders, Some(OrderStatus::Preparing), "");
        assert_eq!(preparing.len(), orders.len());

        let delivered = filter_orders(&orders, Some(OrderStatus::Delivered), "");
        assert!(delivered.is_empty());

        let by_id = filter_orders(&orders, None, "ORDER3");
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].id.as_str(), "order3");

        let both = filter_orders(&orders, Some(OrderStatus::Preparing), "order4");
        assert_eq!(both.len(), 1);
    }
}
