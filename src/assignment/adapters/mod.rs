//! Adapters implementing the assignment ports.

pub mod http;
pub mod memory;
