//! QuickDash Market - Marketplace domain logic.
//!
//! Everything a delivery-marketplace UI needs behind plain function calls:
//!
//! - [`catalog`] - Store/category filtering and free-text search
//! - [`cart`] - Session cart with insert-or-increment aggregation
//! - [`orders`] - Order lifecycle state machine and tracking steps
//! - [`dispatch`] - Driver-side delivery runs and availability
//! - [`session`] - Per-session customer state (cart, filters, checkout)
//! - [`fixtures`] - The in-memory mock data source
//!
//! # Architecture
//!
//! All state is plain owned data mutated synchronously by the caller; there is
//! no I/O, no async, and no interior mutability. Lookups that miss return
//! `Option` or an empty collection - only state-machine misuse and checkout
//! preconditions are errors.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod dispatch;
pub mod fixtures;
pub mod models;
pub mod orders;
pub mod session;

pub use cart::{Cart, CartItem, NewCartItem};
pub use catalog::{Catalog, Category};
pub use dispatch::{DeliveryRun, DispatchError, Dispatcher, RUN_STEPS, RunProgress, RunStep};
pub use models::{
    Address, AddressKind, CourierContact, Driver, Order, OrderLine, PaymentKind, PaymentMethod,
    Product, Store, TrackingInfo, User,
};
pub use orders::{TRACKING_STEPS, TrackingStep, TransitionError, filter_orders, step_index};
pub use session::{CheckoutError, Session};
