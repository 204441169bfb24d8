//! Assignment lifecycle management for Terpdesk.
//!
//! This context owns the lifecycle state machine (pending through
//! confirmed, in-progress, and the terminal statuses), the in-memory store
//! behind the card view, transition orchestration with its confirmation
//! gate, the tab/card/badge projections with their incremental update
//! effects, and the detail modal. The module follows hexagonal
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
