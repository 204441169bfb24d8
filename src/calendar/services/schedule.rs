//! Schedule orchestration: range fetching, navigation, and overlays.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;

use crate::assignment::domain::{AssignmentId, Dismissal};
use crate::calendar::domain::{CalendarEvent, DateRange, EventPanel, RangeUnit, Tooltip};
use crate::calendar::ports::ScheduleFeed;

/// Hover card skeleton for one event.
const TOOLTIP_TEMPLATE: &str = r#"<div class="event-tooltip">
  <h4>{{ title }}</h4>
  <p class="tooltip-time">{{ time }}</p>
  <p class="tooltip-location">{{ location }}</p>
  <p class="tooltip-languages">{{ language_pair }}</p>
  <p class="tooltip-rate">{{ rate }}/hr for {{ duration }} hours</p>
  <p class="tooltip-total">Estimated: {{ estimated_total }}</p>
</div>"#;

/// Detail panel skeleton, rendered purely from embedded attributes.
const PANEL_TEMPLATE: &str = r#"<div class="event-panel" data-assignment-id="{{ id }}">
  <span class="status-badge {{ status_class }}">{{ status_label }}</span>
  <h3>{{ title }}</h3>
  <dl class="panel-grid">
    <dt>Time</dt><dd>{{ time }}</dd>
    <dt>Location</dt><dd>{{ location }}</dd>
    <dt>Languages</dt><dd>{{ language_pair }}</dd>
    <dt>Duration</dt><dd>{{ duration }} hours</dd>
    <dt>Rate</dt><dd>{{ rate }}/hr, minimum {{ minimum_hours }} hours</dd>
    <dt>Estimated Total</dt><dd>{{ estimated_total }}</dd>
    <dt>Special Requirements</dt><dd>{{ special_requirements }}</dd>
  </dl>
</div>"#;

/// Outcome of loading the visible range.
///
/// A failed fetch is not an error to propagate: the calendar shows an empty
/// range plus an error indicator and stays interactive.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeFetch {
    /// Events for the visible range, possibly empty.
    Loaded(Vec<CalendarEvent>),
    /// The fetch failed; the displayed set is empty.
    Failed {
        /// Message for the error indicator.
        message: String,
    },
}

impl RangeFetch {
    /// Returns whether events were loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Drives the schedule view: visible range, event cache, and the tooltip
/// and detail-panel slots.
///
/// At most one tooltip and one panel are live at a time. Overlays never
/// survive a range change, and the panel opens from the cached event with
/// no second fetch.
#[derive(Debug)]
pub struct CalendarService<F, C> {
    feed: Arc<F>,
    clock: Arc<C>,
    unit: RangeUnit,
    anchor: NaiveDate,
    events: Vec<CalendarEvent>,
    tooltip: Option<Tooltip>,
    panel: Option<EventPanel>,
}

impl<F, C> CalendarService<F, C>
where
    F: ScheduleFeed,
    C: Clock,
{
    /// Creates a service anchored on today in month view.
    #[must_use]
    pub fn new(feed: Arc<F>, clock: Arc<C>) -> Self {
        let anchor = clock.utc().date_naive();
        Self {
            feed,
            clock,
            unit: RangeUnit::Month,
            anchor,
            events: Vec::new(),
            tooltip: None,
            panel: None,
        }
    }

    /// Returns the current view granularity.
    #[must_use]
    pub const fn visible_unit(&self) -> RangeUnit {
        self.unit
    }

    /// Returns the currently visible range.
    #[must_use]
    pub fn visible_range(&self) -> DateRange {
        self.unit.range_containing(self.anchor)
    }

    /// Returns the events loaded for the visible range.
    #[must_use]
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Looks up a loaded event by its assignment id.
    #[must_use]
    pub fn event(&self, id: AssignmentId) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.id() == id)
    }

    /// Re-fetches the visible range.
    pub async fn refresh(&mut self) -> RangeFetch {
        self.load_visible().await
    }

    /// Switches the view granularity and fetches the new range.
    pub async fn set_view(&mut self, unit: RangeUnit) -> RangeFetch {
        self.unit = unit;
        self.load_visible().await
    }

    /// Jumps the view to the range containing today.
    pub async fn today(&mut self) -> RangeFetch {
        self.anchor = self.clock.utc().date_naive();
        self.load_visible().await
    }

    /// Moves the view one unit forward.
    pub async fn forward(&mut self) -> RangeFetch {
        self.anchor = self.unit.step(self.anchor, true);
        self.load_visible().await
    }

    /// Moves the view one unit back.
    pub async fn back(&mut self) -> RangeFetch {
        self.anchor = self.unit.step(self.anchor, false);
        self.load_visible().await
    }

    /// Shows the tooltip for an event, replacing any live tooltip.
    ///
    /// The previous tooltip is destroyed even when the new one fails to
    /// render; `None` means no tooltip is live.
    pub fn pointer_enter(&mut self, id: AssignmentId) -> Option<&Tooltip> {
        self.tooltip = None;
        let event = self.events.iter().find(|event| event.id() == id)?;
        let context = minijinja::context! {
            title => event.title(),
            time => event.slot().short_range(),
            location => location_line(event),
            language_pair => event.language_pair(),
            rate => event.payment().hourly_rate().to_string(),
            duration => event.duration_display(),
            estimated_total => event.estimated_total().to_string(),
        };
        match minijinja::Environment::new().render_str(TOOLTIP_TEMPLATE, context) {
            Ok(markup) => {
                self.tooltip = Some(Tooltip::new(id, markup));
                self.tooltip.as_ref()
            }
            Err(error) => {
                tracing::warn!(id = %id, error = %error, "tooltip render failed");
                None
            }
        }
    }

    /// Destroys the live tooltip, if any.
    pub fn pointer_leave(&mut self) {
        self.tooltip = None;
    }

    /// Returns the live tooltip, when one is shown.
    #[must_use]
    pub const fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Opens the detail panel for an event from its embedded attributes.
    ///
    /// No network is involved; `None` means the event is not in the loaded
    /// range or the panel failed to render.
    pub fn select(&mut self, id: AssignmentId) -> Option<&EventPanel> {
        self.panel = None;
        let event = self.events.iter().find(|event| event.id() == id)?;
        let context = minijinja::context! {
            id => event.id().value(),
            status_label => event.status().label(),
            status_class => event.status().css_class(),
            title => event.title(),
            time => event.slot().short_range(),
            location => location_line(event),
            language_pair => event.language_pair(),
            duration => event.duration_display(),
            rate => event.payment().hourly_rate().to_string(),
            minimum_hours => event.payment().minimum_hours(),
            estimated_total => event.estimated_total().to_string(),
            special_requirements => event.special_requirements(),
        };
        match minijinja::Environment::new().render_str(PANEL_TEMPLATE, context) {
            Ok(markup) => {
                self.panel = Some(EventPanel::new(id, markup));
                self.panel.as_ref()
            }
            Err(error) => {
                tracing::warn!(id = %id, error = %error, "panel render failed");
                None
            }
        }
    }

    /// Closes the detail panel, if open, and reports whether one was open.
    pub fn dismiss_panel(&mut self, reason: Dismissal) -> bool {
        let was_open = self.panel.take().is_some();
        if was_open {
            tracing::debug!(?reason, "event panel dismissed");
        }
        was_open
    }

    /// Returns the open detail panel, when one is open.
    #[must_use]
    pub const fn panel(&self) -> Option<&EventPanel> {
        self.panel.as_ref()
    }

    async fn load_visible(&mut self) -> RangeFetch {
        self.tooltip = None;
        self.panel = None;
        let range = self.visible_range();
        match self.feed.events_between(&range).await {
            Ok(events) => {
                self.events.clone_from(&events);
                RangeFetch::Loaded(events)
            }
            Err(error) => {
                tracing::warn!(error = %error, "schedule fetch failed");
                self.events.clear();
                RangeFetch::Failed {
                    message: error.user_message(),
                }
            }
        }
    }
}

fn location_line(event: &CalendarEvent) -> String {
    if event.city().is_empty() {
        event.location().to_owned()
    } else {
        format!("{}, {}", event.location(), event.city())
    }
}
