//! Adapters that connect the domain ports to external services.

pub mod assistant;
pub mod speech;
