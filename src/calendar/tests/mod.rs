//! Unit tests for the calendar module.
