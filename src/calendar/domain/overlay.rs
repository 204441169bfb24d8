//! Tooltip and detail-panel overlays scoped to one event.

use crate::assignment::domain::AssignmentId;
use uuid::Uuid;

/// A live tooltip instance.
///
/// The instance id distinguishes a replacement tooltip from the one it
/// destroyed, so a stale hide cannot tear down the wrong instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    instance: Uuid,
    event_id: AssignmentId,
    markup: String,
}

impl Tooltip {
    pub(crate) fn new(event_id: AssignmentId, markup: String) -> Self {
        Self {
            instance: Uuid::new_v4(),
            event_id,
            markup,
        }
    }

    /// Returns the unique instance identifier.
    #[must_use]
    pub const fn instance(&self) -> Uuid {
        self.instance
    }

    /// Returns the event the tooltip describes.
    #[must_use]
    pub const fn event_id(&self) -> AssignmentId {
        self.event_id
    }

    /// Returns the rendered tooltip markup.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

/// The open event detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPanel {
    event_id: AssignmentId,
    markup: String,
}

impl EventPanel {
    pub(crate) const fn new(event_id: AssignmentId, markup: String) -> Self {
        Self { event_id, markup }
    }

    /// Returns the event the panel describes.
    #[must_use]
    pub const fn event_id(&self) -> AssignmentId {
        self.event_id
    }

    /// Returns the rendered panel markup.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }
}
