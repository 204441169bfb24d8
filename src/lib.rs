//! Terpdesk: client-side orchestration core for interpreter assignment
//! scheduling.
//!
//! This crate tracks the lifecycle of interpretation assignments, keeps an
//! in-memory store of the currently visible assignments consistent with the
//! backend, and projects that store onto card tabs, a calendar, and
//! notification badges.
//!
//! # Architecture
//!
//! Terpdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure state machines and projections with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the backend and user prompts
//! - **Adapters**: Concrete implementations of ports (HTTP backend, in-memory
//!   doubles)
//!
//! # Modules
//!
//! - [`assignment`]: Lifecycle state machine, store, and view synchronisation
//! - [`calendar`]: Range-scoped event fetching and tooltip/panel overlays
//! - [`notification`]: Unread-count polling and badge state
//! - [`session`]: Validated backend session shared by the HTTP adapters

pub mod assignment;
pub mod calendar;
pub mod notification;
pub mod session;
