//! Unread-notification badge for Terpdesk.
//!
//! This context polls the backend for the unread count on a fixed
//! interval, publishes badge state to whoever renders it, and carries the
//! optimistic mark-read and acknowledge paths that clear the attention
//! animation without waiting on the network. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
