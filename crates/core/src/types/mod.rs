//! Core types for QuickDash.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod geo;
pub mod id;
pub mod status;

pub use geo::GeoPoint;
pub use id::*;
pub use status::*;
