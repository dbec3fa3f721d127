//! CLI command implementations.

pub mod browse;
pub mod deliver;
pub mod track;
