//! Domain types for the notification context.

use serde::{Deserialize, Serialize};

/// Badge state derived from the unread notification count.
///
/// The badge is visible while the count is positive; the attention
/// animation runs alongside it until acknowledged. Acknowledging clears the
/// attention flag immediately without waiting for the next poll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeState {
    count: u64,
    attention: bool,
}

impl BadgeState {
    /// Creates the state for a fresh unread count.
    #[must_use]
    pub const fn with_count(count: u64) -> Self {
        Self {
            count,
            attention: count > 0,
        }
    }

    /// Returns the unread count.
    #[must_use]
    pub const fn count(self) -> u64 {
        self.count
    }

    /// Returns whether the badge is shown at all.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.count > 0
    }

    /// Returns whether the attention animation runs.
    #[must_use]
    pub const fn has_attention(self) -> bool {
        self.attention
    }

    /// Returns the state with the attention flag cleared.
    #[must_use]
    pub const fn acknowledged(self) -> Self {
        Self {
            count: self.count,
            attention: false,
        }
    }
}
