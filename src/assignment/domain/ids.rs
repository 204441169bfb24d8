//! Identifier types for the assignment domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an assignment record.
///
/// The backend keys assignments by integer primary key; the value is opaque
/// to the client and stable for the entity's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentId(i64);

impl AssignmentId {
    /// Creates an identifier from a raw backend key.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the wrapped numeric key.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for AssignmentId {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
