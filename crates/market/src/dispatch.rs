//! Driver-side dispatch: availability toggling and delivery runs.
//!
//! A [`Dispatcher`] owns the driver record, the pool of available orders, and
//! the active [`DeliveryRun`]. It is the single writer of
//! `Driver::active_order_id`, which keeps the invariant local: the reference
//! is set exactly when a run exists, and clearing it always comes with a
//! return to `online` and a `total_deliveries` increment.

use thiserror::Error;
use tracing::info;

use quickdash_core::{DeliveryStep, DriverStatus, OrderId, OrderStatus};

use crate::models::{Driver, Order};

/// Error for dispatch operations that would break an invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// Accepting or advancing requires the driver to be online.
    #[error("driver is offline")]
    Offline,

    /// The driver already has an active delivery.
    #[error("driver already has an active delivery")]
    AlreadyBusy,

    /// Going offline mid-delivery would orphan the run.
    #[error("driver cannot go offline during an active delivery")]
    BusyCannotGoOffline,

    /// Advance was called with no run in progress.
    #[error("no active delivery run")]
    NoActiveRun,

    /// The order is not in the available pool.
    #[error("order {0} is not available for pickup")]
    UnknownOrder(OrderId),
}

/// One entry in the driver-facing run stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStep {
    /// The step this entry represents.
    pub step: DeliveryStep,
    /// Display label.
    pub label: &'static str,
    /// Icon name for the presentation layer.
    pub icon: &'static str,
}

/// The ordered driver run steps.
pub const RUN_STEPS: [RunStep; 4] = [
    RunStep {
        step: DeliveryStep::Accept,
        label: "Order Accepted",
        icon: "package",
    },
    RunStep {
        step: DeliveryStep::ArrivedAtStore,
        label: "Arrived at Store",
        icon: "map-pin",
    },
    RunStep {
        step: DeliveryStep::PickedUp,
        label: "Order Picked Up",
        icon: "bike",
    },
    RunStep {
        step: DeliveryStep::Delivered,
        label: "Order Delivered",
        icon: "check-circle",
    },
];

/// An in-progress delivery.
///
/// Holds the accepted order so the driver screen can render details without
/// a lookup. Created at [`DeliveryStep::Accept`]; the dispatcher retires it
/// when the final step is reached.
#[derive(Debug, Clone)]
pub struct DeliveryRun {
    order: Order,
    step: DeliveryStep,
}

impl DeliveryRun {
    /// The order being delivered.
    #[must_use]
    pub const fn order(&self) -> &Order {
        &self.order
    }

    /// The current step.
    #[must_use]
    pub const fn step(&self) -> DeliveryStep {
        self.step
    }

    /// Index of the current step in [`RUN_STEPS`].
    ///
    /// Steps at or before this index render as completed/active.
    #[must_use]
    pub fn step_index(&self) -> usize {
        RUN_STEPS
            .iter()
            .position(|entry| entry.step == self.step)
            .unwrap_or_default()
    }
}

/// Driver dispatch state.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    driver: Driver,
    available: Vec<Order>,
    run: Option<DeliveryRun>,
}

impl Dispatcher {
    /// Create a dispatcher for a driver with a pool of available orders.
    ///
    /// Any stale `active_order_id` on the incoming record is cleared; runs
    /// only exist while this dispatcher tracks them.
    #[must_use]
    pub fn new(mut driver: Driver, available: Vec<Order>) -> Self {
        driver.active_order_id = None;
        if driver.status == DriverStatus::Busy {
            driver.status = DriverStatus::Online;
        }
        Self {
            driver,
            available,
            run: None,
        }
    }

    /// The driver record.
    #[must_use]
    pub const fn driver(&self) -> &Driver {
        &self.driver
    }

    /// The run in progress, if any.
    #[must_use]
    pub const fn active_run(&self) -> Option<&DeliveryRun> {
        self.run.as_ref()
    }

    /// Orders waiting for a driver, all still `preparing`.
    #[must_use]
    pub fn available_orders(&self) -> &[Order] {
        &self.available
    }

    /// Go online and start receiving delivery requests.
    pub fn set_online(&mut self) {
        if self.driver.status == DriverStatus::Offline {
            info!(driver = %self.driver.id, "driver online");
            self.driver.status = DriverStatus::Online;
        }
    }

    /// Go offline.
    ///
    /// # Errors
    ///
    /// [`DispatchError::BusyCannotGoOffline`] while a run is in progress.
    pub fn set_offline(&mut self) -> Result<(), DispatchError> {
        if self.run.is_some() {
            return Err(DispatchError::BusyCannotGoOffline);
        }
        info!(driver = %self.driver.id, "driver offline");
        self.driver.status = DriverStatus::Offline;
        Ok(())
    }

    /// Accept an available order and start a delivery run.
    ///
    /// Marks the driver busy and records the order as their active one.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::Offline`] if the driver is offline.
    /// - [`DispatchError::AlreadyBusy`] if a run is already in progress.
    /// - [`DispatchError::UnknownOrder`] if the order is not in the pool.
    pub fn accept(&mut self, order_id: &OrderId) -> Result<&DeliveryRun, DispatchError> {
        match self.driver.status {
            DriverStatus::Offline => return Err(DispatchError::Offline),
            DriverStatus::Busy => return Err(DispatchError::AlreadyBusy),
            DriverStatus::Online => {}
        }
        if self.run.is_some() {
            return Err(DispatchError::AlreadyBusy);
        }

        let position = self
            .available
            .iter()
            .position(|order| &order.id == order_id)
            .ok_or_else(|| DispatchError::UnknownOrder(order_id.clone()))?;
        let order = self.available.remove(position);

        info!(driver = %self.driver.id, order = %order.id, store = %order.store_name, "order accepted");
        self.driver.status = DriverStatus::Busy;
        self.driver.active_order_id = Some(order.id.clone());
        Ok(self.run.insert(DeliveryRun {
            order,
            step: DeliveryStep::Accept,
        }))
    }

    /// Advance the active run one step.
    ///
    /// Reaching [`DeliveryStep::Delivered`] completes the run in the same
    /// call: the delivered order is returned to the caller, the driver's
    /// active order clears, their status returns to `online`, and
    /// `total_deliveries` goes up by one.
    ///
    /// # Errors
    ///
    /// [`DispatchError::NoActiveRun`] if there is nothing to advance.
    pub fn advance_run(&mut self) -> Result<RunProgress, DispatchError> {
        let run = self.run.as_mut().ok_or(DispatchError::NoActiveRun)?;

        // Delivered is retired immediately below, so an active run always
        // has a successor.
        let next = run.step.successor().ok_or(DispatchError::NoActiveRun)?;
        run.step = next;
        info!(driver = %self.driver.id, order = %run.order.id, step = %next, "delivery run advanced");

        if next == DeliveryStep::Delivered {
            let mut finished = self
                .run
                .take()
                .ok_or(DispatchError::NoActiveRun)?;
            finished.order.status = OrderStatus::Delivered;

            self.driver.active_order_id = None;
            self.driver.status = DriverStatus::Online;
            self.driver.total_deliveries += 1;
            info!(
                driver = %self.driver.id,
                order = %finished.order.id,
                total_deliveries = self.driver.total_deliveries,
                "delivery completed"
            );
            return Ok(RunProgress::Completed(finished.order));
        }

        Ok(RunProgress::Step(next))
    }
}

/// Outcome of advancing a delivery run.
#[derive(Debug, Clone)]
pub enum RunProgress {
    /// The run moved to an intermediate step.
    Step(DeliveryStep),
    /// The run finished; the delivered order is handed back.
    Completed(Order),
}
