//! Unit tests for the notification module.
