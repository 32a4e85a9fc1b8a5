//! Output artifacts
//!
//! Writes the receivers file and the routes file consumed by Alertmanager.

pub mod writer;

pub use writer::{write_receivers, write_routes, WriteError};
