//! Unit tests for the assignment module.
//!
//! Organised by concern: the status machine, transition orchestration, view
//! synchronisation, and the detail modal. Store and value-type edge cases
//! live beside their types.

mod detail_service_tests;
mod fixtures;
