//! Presentation projections: buckets, cards, badges, empty states, notices.
//!
//! Everything here is a pure value computed from the store. Surfaces render
//! these projections and never read state back out of rendered markup.

use super::{AssignmentId, AssignmentStatus, AssignmentSummary};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// How long a transient notice stays on screen.
pub const NOTICE_DISMISS_AFTER: Duration = Duration::from_secs(3);

/// How long the card exit animation runs before the card is removed.
pub const CARD_EXIT_ANIMATION: Duration = Duration::from_millis(300);

/// Tab grouping of assignments by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bucket {
    /// Offered assignments awaiting a decision.
    Pending,
    /// Accepted assignments that have not started.
    Upcoming,
    /// Assignments currently underway.
    InProgress,
    /// Finished assignments.
    Completed,
}

impl Bucket {
    /// All buckets in tab order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Upcoming,
        Self::InProgress,
        Self::Completed,
    ];

    /// Returns the bucket a status is displayed under, when any.
    ///
    /// Terminal rejected, cancelled, and no-show assignments have no tab;
    /// reaching such a status removes the card from the view.
    #[must_use]
    pub const fn of(status: AssignmentStatus) -> Option<Self> {
        match status {
            AssignmentStatus::Pending | AssignmentStatus::Assigned => Some(Self::Pending),
            AssignmentStatus::Confirmed => Some(Self::Upcoming),
            AssignmentStatus::InProgress => Some(Self::InProgress),
            AssignmentStatus::Completed => Some(Self::Completed),
            AssignmentStatus::Cancelled
            | AssignmentStatus::NoShow
            | AssignmentStatus::Rejected => None,
        }
    }

    /// Returns the stable name used in tab identifiers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Upcoming => "upcoming",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Returns the tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Upcoming => "Upcoming",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Resolves a bucket from its name, tolerating the snake_case count keys.
    ///
    /// Unrecognized names fall back to `Pending`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Self::Upcoming,
            "in-progress" | "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            _ => Self::Pending,
        }
    }

    /// Returns the placeholder content shown when the bucket has no cards.
    #[must_use]
    pub const fn empty_state(self) -> EmptyState {
        match self {
            Self::Pending => EmptyState {
                icon: "inbox",
                text: "No pending assignments",
                subtext: "New assignments will appear here",
            },
            Self::Upcoming => EmptyState {
                icon: "calendar",
                text: "No upcoming assignments",
                subtext: "Accepted assignments will appear here",
            },
            Self::InProgress => EmptyState {
                icon: "tasks",
                text: "No assignments in progress",
                subtext: "Active assignments will appear here",
            },
            Self::Completed => EmptyState {
                icon: "check-double",
                text: "No completed assignments",
                subtext: "Your completed assignments will appear here",
            },
        }
    }
}

/// Placeholder content for a bucket with no cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    icon: &'static str,
    text: &'static str,
    subtext: &'static str,
}

impl EmptyState {
    /// Returns the icon name.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        self.icon
    }

    /// Returns the headline text.
    #[must_use]
    pub const fn text(self) -> &'static str {
        self.text
    }

    /// Returns the supporting text.
    #[must_use]
    pub const fn subtext(self) -> &'static str {
        self.subtext
    }
}

/// Per-bucket card counts, always computed by a live scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    pending: usize,
    upcoming: usize,
    in_progress: usize,
    completed: usize,
}

impl BucketCounts {
    /// Creates counts from per-bucket values.
    #[must_use]
    pub const fn new(pending: usize, upcoming: usize, in_progress: usize, completed: usize) -> Self {
        Self {
            pending,
            upcoming,
            in_progress,
            completed,
        }
    }

    /// Tallies counts over a stream of statuses.
    ///
    /// Statuses without a bucket contribute nothing.
    #[must_use]
    pub fn tally<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = AssignmentStatus>,
    {
        let mut counts = Self::default();
        for status in statuses {
            match Bucket::of(status) {
                Some(Bucket::Pending) => counts.pending += 1,
                Some(Bucket::Upcoming) => counts.upcoming += 1,
                Some(Bucket::InProgress) => counts.in_progress += 1,
                Some(Bucket::Completed) => counts.completed += 1,
                None => {}
            }
        }
        counts
    }

    /// Returns the count for one bucket.
    #[must_use]
    pub const fn get(self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Pending => self.pending,
            Bucket::Upcoming => self.upcoming,
            Bucket::InProgress => self.in_progress,
            Bucket::Completed => self.completed,
        }
    }

    /// Returns the badge value for one bucket: `None` means hidden.
    #[must_use]
    pub const fn badge(self, bucket: Bucket) -> Option<usize> {
        match self.get(bucket) {
            0 => None,
            count => Some(count),
        }
    }

    /// Returns the total card count across all buckets.
    #[must_use]
    pub const fn total(self) -> usize {
        self.pending + self.upcoming + self.in_progress + self.completed
    }
}

/// One action control offered on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardAction {
    target: AssignmentStatus,
    verb: &'static str,
}

impl CardAction {
    /// Creates the control for a transition target.
    ///
    /// Targets without a verb fall back to their lowercase label.
    #[must_use]
    pub const fn for_target(target: AssignmentStatus) -> Self {
        let verb = match target.action_verb() {
            Some(verb) => verb,
            None => "update",
        };
        Self { target, verb }
    }

    /// Returns the transition target the control requests.
    #[must_use]
    pub const fn target(self) -> AssignmentStatus {
        self.target
    }

    /// Returns the action verb, e.g. `accept`.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        self.verb
    }
}

/// Card projection for one assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    id: AssignmentId,
    status: AssignmentStatus,
    time_line: String,
    location_line: String,
    language_pair: String,
    service_type: String,
    rate_line: String,
    actions: Vec<CardAction>,
    actions_enabled: bool,
}

impl CardView {
    /// Projects a card out of a stored summary.
    #[must_use]
    pub fn project(summary: &AssignmentSummary, actions_enabled: bool) -> Self {
        let location_line = if summary.city().is_empty() {
            summary.location().to_owned()
        } else {
            format!("{}, {}", summary.location(), summary.city())
        };
        Self {
            id: summary.id(),
            status: summary.status(),
            time_line: summary.slot().short_range(),
            location_line,
            language_pair: summary.language_pair(),
            service_type: summary.service_type().to_owned(),
            rate_line: format!("{}/hr", summary.hourly_rate()),
            actions: summary
                .status()
                .card_actions()
                .iter()
                .map(|target| CardAction::for_target(*target))
                .collect(),
            actions_enabled,
        }
    }

    /// Returns the assignment identifier.
    #[must_use]
    pub const fn id(&self) -> AssignmentId {
        self.id
    }

    /// Returns the displayed status.
    #[must_use]
    pub const fn status(&self) -> AssignmentStatus {
        self.status
    }

    /// Returns the formatted schedule line.
    #[must_use]
    pub fn time_line(&self) -> &str {
        &self.time_line
    }

    /// Returns the formatted location line.
    #[must_use]
    pub fn location_line(&self) -> &str {
        &self.location_line
    }

    /// Returns the language pair line.
    #[must_use]
    pub fn language_pair(&self) -> &str {
        &self.language_pair
    }

    /// Returns the service type line.
    #[must_use]
    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    /// Returns the formatted rate line, e.g. `$50.00/hr`.
    #[must_use]
    pub fn rate_line(&self) -> &str {
        &self.rate_line
    }

    /// Returns the offered action controls.
    #[must_use]
    pub fn actions(&self) -> &[CardAction] {
        &self.actions
    }

    /// Returns whether the action controls are currently enabled.
    #[must_use]
    pub const fn actions_enabled(&self) -> bool {
        self.actions_enabled
    }
}

/// One tab's projection: badge, ordered cards, optional empty state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    bucket: Bucket,
    badge: Option<usize>,
    cards: Vec<CardView>,
    empty_state: Option<EmptyState>,
}

impl TabView {
    /// Creates a tab projection.
    ///
    /// The empty state is present exactly when there are no cards.
    #[must_use]
    pub fn new(bucket: Bucket, badge: Option<usize>, cards: Vec<CardView>) -> Self {
        let empty_state = cards.is_empty().then(|| bucket.empty_state());
        Self {
            bucket,
            badge,
            cards,
            empty_state,
        }
    }

    /// Returns the bucket this tab displays.
    #[must_use]
    pub const fn bucket(&self) -> Bucket {
        self.bucket
    }

    /// Returns the badge value; `None` means hidden.
    #[must_use]
    pub const fn badge(&self) -> Option<usize> {
        self.badge
    }

    /// Returns the ordered cards.
    #[must_use]
    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    /// Returns the empty-state placeholder, when the tab has no cards.
    #[must_use]
    pub const fn empty_state(&self) -> Option<EmptyState> {
        self.empty_state
    }
}

/// Whole-surface projection: all tabs plus the stat values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    tabs: Vec<TabView>,
    stats: BucketCounts,
}

impl ScreenView {
    /// Creates a surface projection.
    #[must_use]
    pub const fn new(tabs: Vec<TabView>, stats: BucketCounts) -> Self {
        Self { tabs, stats }
    }

    /// Returns the tabs in display order.
    #[must_use]
    pub fn tabs(&self) -> &[TabView] {
        &self.tabs
    }

    /// Returns one tab's projection.
    #[must_use]
    pub fn tab(&self, bucket: Bucket) -> Option<&TabView> {
        self.tabs.iter().find(|tab| tab.bucket() == bucket)
    }

    /// Returns the stat-card values.
    #[must_use]
    pub const fn stats(&self) -> BucketCounts {
        self.stats
    }
}

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeSeverity {
    /// Confirmation of an applied change.
    Success,
    /// A failed operation; prior state is intact.
    Error,
    /// Neutral information.
    Info,
}

/// Transient auto-dismissing notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    id: Uuid,
    severity: NoticeSeverity,
    message: String,
}

impl Notice {
    /// Creates a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::of(NoticeSeverity::Success, message)
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::of(NoticeSeverity::Error, message)
    }

    /// Creates an informational notice.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::of(NoticeSeverity::Info, message)
    }

    fn of(severity: NoticeSeverity, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            severity,
            message: message.into(),
        }
    }

    /// Returns the unique notice identifier.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the severity.
    #[must_use]
    pub const fn severity(&self) -> NoticeSeverity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns how long the notice stays on screen.
    #[must_use]
    pub const fn dismiss_after(&self) -> Duration {
        NOTICE_DISMISS_AFTER
    }
}

/// Why an overlay was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    /// The explicit close control was used.
    CloseControl,
    /// A click landed outside the overlay bounds.
    OutsideClick,
}

/// Incremental surface mutation emitted after a settled transition.
///
/// Effects are ordered; applying them in sequence brings the rendered
/// surface in line with the store without a reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEffect {
    /// Enable or disable the action controls on one card.
    SetCardControls {
        /// Card to toggle.
        id: AssignmentId,
        /// Whether the controls accept input.
        enabled: bool,
    },
    /// Remove a card from a bucket, optionally running the exit animation.
    RemoveCard {
        /// Bucket the card leaves.
        bucket: Bucket,
        /// Card to remove.
        id: AssignmentId,
        /// Whether to run the exit animation before removal.
        animated: bool,
    },
    /// Clear a bucket's empty-state placeholder before inserting a card.
    ClearEmptyState {
        /// Bucket to clear.
        bucket: Bucket,
    },
    /// Insert a card into a bucket.
    InsertCard {
        /// Destination bucket.
        bucket: Bucket,
        /// Freshly projected card.
        card: CardView,
    },
    /// Install a bucket's empty-state placeholder.
    InstallEmptyState {
        /// Bucket that ran out of cards.
        bucket: Bucket,
        /// Placeholder content.
        state: EmptyState,
    },
    /// Recompute tab badges and stat values.
    UpdateBadges(BucketCounts),
    /// Show a transient notice.
    ShowNotice(Notice),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AssignmentStatus::Pending, Some(Bucket::Pending))]
    #[case(AssignmentStatus::Assigned, Some(Bucket::Pending))]
    #[case(AssignmentStatus::Confirmed, Some(Bucket::Upcoming))]
    #[case(AssignmentStatus::InProgress, Some(Bucket::InProgress))]
    #[case(AssignmentStatus::Completed, Some(Bucket::Completed))]
    #[case(AssignmentStatus::Cancelled, None)]
    #[case(AssignmentStatus::NoShow, None)]
    #[case(AssignmentStatus::Rejected, None)]
    fn status_bucket_mapping(
        #[case] status: AssignmentStatus,
        #[case] expected: Option<Bucket>,
    ) {
        assert_eq!(Bucket::of(status), expected);
    }

    #[rstest]
    #[case("pending", Bucket::Pending)]
    #[case("upcoming", Bucket::Upcoming)]
    #[case("in-progress", Bucket::InProgress)]
    #[case("in_progress", Bucket::InProgress)]
    #[case("COMPLETED", Bucket::Completed)]
    #[case("archived", Bucket::Pending)]
    #[case("", Bucket::Pending)]
    fn bucket_names_fall_back_to_pending(#[case] name: &str, #[case] expected: Bucket) {
        assert_eq!(Bucket::from_name(name), expected);
    }

    #[test]
    fn empty_states_carry_the_bucket_copy() {
        let state = Bucket::Upcoming.empty_state();
        assert_eq!(state.icon(), "calendar");
        assert_eq!(state.text(), "No upcoming assignments");
        assert_eq!(state.subtext(), "Accepted assignments will appear here");
    }

    #[test]
    fn zero_counts_hide_the_badge() {
        let counts = BucketCounts::new(2, 0, 1, 0);
        assert_eq!(counts.badge(Bucket::Pending), Some(2));
        assert_eq!(counts.badge(Bucket::Upcoming), None);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn tally_skips_bucketless_statuses() {
        let counts = BucketCounts::tally([
            AssignmentStatus::Pending,
            AssignmentStatus::Assigned,
            AssignmentStatus::Cancelled,
            AssignmentStatus::Confirmed,
        ]);
        assert_eq!(counts, BucketCounts::new(2, 1, 0, 0));
    }

    #[test]
    fn notices_auto_dismiss_after_three_seconds() {
        let notice = Notice::success("Assignment accepted");
        assert_eq!(notice.dismiss_after(), Duration::from_secs(3));
        assert_eq!(notice.severity(), NoticeSeverity::Success);
    }
}
