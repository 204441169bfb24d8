//! Schedule calendar for Terpdesk.
//!
//! This context fetches the events visible in a calendar range, projects
//! them with their status colours and embedded assignment attributes, and
//! owns the tooltip and detail-panel overlays. Fetches are tolerant: a
//! failed range load shows an empty calendar with an error indicator and
//! never breaks the view. The module follows hexagonal architecture:
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
