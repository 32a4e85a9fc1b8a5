//! Service ownership registry
//!
//! The input side of the generator: which services exist, who owns them and
//! where their alerts should be delivered.

pub mod loader;
pub mod service;

pub use loader::{load, LoadError, ReadPolicy};
pub use service::{Service, ServiceRegistry};
