//! QuickDash Core - Shared types library.
//!
//! This crate provides common types used across all QuickDash components:
//! - `market` - Catalog, cart, order, and dispatch domain logic
//! - `cli` - Command-line front end for browsing fixtures and demoing flows
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no fixtures, no mutable state.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, status enums, and the geo point

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
