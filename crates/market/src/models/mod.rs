//! Domain model types.
//!
//! Plain data structs mirroring the fixture records. Behavior that mutates
//! them (lifecycle transitions, dispatch bookkeeping) lives in the sibling
//! modules next to its rules.

pub mod driver;
pub mod order;
pub mod store;
pub mod user;

pub use driver::Driver;
pub use order::{CourierContact, Order, OrderLine, TrackingInfo};
pub use store::{Product, Store};
pub use user::{Address, AddressKind, PaymentKind, PaymentMethod, User};
