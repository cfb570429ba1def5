//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the expansion engine and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod environment_store;

pub use environment_store::EnvironmentStore;
