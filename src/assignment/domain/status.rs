//! Assignment lifecycle status and transition legality.

use super::ParseStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an assignment.
///
/// `Pending` is the canonical entry state. The backend also serves
/// `Assigned` as an entry state; [`AssignmentStatus::canonical_entry`] folds
/// it into `Pending` when summaries enter the store, while the calendar
/// colour map keeps the two distinct.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    /// Offered to the interpreter, awaiting an accept or reject.
    Pending,
    /// Alias entry state served by some backend flows.
    Assigned,
    /// Accepted and scheduled.
    Confirmed,
    /// Work has started.
    InProgress,
    /// Work finished.
    Completed,
    /// Called off before completion.
    Cancelled,
    /// The party did not appear.
    NoShow,
    /// Declined by the interpreter.
    Rejected,
}

impl AssignmentStatus {
    /// All statuses in wire order.
    pub const ALL: [Self; 8] = [
        Self::Pending,
        Self::Assigned,
        Self::Confirmed,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
        Self::NoShow,
        Self::Rejected,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Assigned => "ASSIGNED",
            Self::Confirmed => "CONFIRMED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::NoShow => "NO_SHOW",
            Self::Rejected => "REJECTED",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Assigned => "Assigned",
            Self::Confirmed => "Confirmed",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::NoShow => "No Show",
            Self::Rejected => "Rejected",
        }
    }

    /// Returns the calendar colour for this status.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Pending => "#FFA500",
            Self::Assigned => "#4299e1",
            Self::Confirmed => "#48bb78",
            Self::InProgress => "#805ad5",
            Self::Completed => "#718096",
            Self::Cancelled | Self::Rejected => "#f56565",
            Self::NoShow => "#ed8936",
        }
    }

    /// Returns the CSS badge class for this status.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "status-pending",
            Self::Assigned => "status-assigned",
            Self::Confirmed => "status-confirmed",
            Self::InProgress => "status-in-progress",
            Self::Completed => "status-completed",
            Self::Cancelled => "status-cancelled",
            Self::NoShow => "status-no-show",
            Self::Rejected => "status-rejected",
        }
    }

    /// Folds the `Assigned` alias into the canonical `Pending` entry state.
    #[must_use]
    pub const fn canonical_entry(self) -> Self {
        match self {
            Self::Assigned => Self::Pending,
            other => other,
        }
    }

    /// Returns whether no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Cancelled | Self::NoShow | Self::Rejected
        )
    }

    /// Returns whether transition to `target` is allowed.
    ///
    /// Legality is ultimately backend-enforced; the client uses the matrix to
    /// decide which controls to offer and treats a refused attempt as a
    /// failure outcome.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (
                Self::Pending | Self::Assigned,
                Self::Confirmed | Self::Rejected
            ) | (
                Self::Confirmed,
                Self::InProgress | Self::Cancelled | Self::NoShow
            ) | (Self::InProgress, Self::Completed | Self::Cancelled)
        )
    }

    /// Returns whether a transition targeting this status prompts the user
    /// before any network call.
    ///
    /// `NoShow` is applied without a prompt; every other reachable target is
    /// destructive enough to confirm first.
    #[must_use]
    pub const fn requires_confirmation(self) -> bool {
        matches!(
            self,
            Self::Confirmed | Self::Rejected | Self::InProgress | Self::Completed | Self::Cancelled
        )
    }

    /// Returns the action verb for a transition targeting this status.
    #[must_use]
    pub const fn action_verb(self) -> Option<&'static str> {
        match self {
            Self::Confirmed => Some("accept"),
            Self::Rejected => Some("reject"),
            Self::InProgress => Some("start"),
            Self::Completed => Some("complete"),
            Self::Cancelled => Some("cancel"),
            Self::Pending | Self::Assigned | Self::NoShow => None,
        }
    }

    /// Returns the transition targets offered as card controls.
    ///
    /// A subset of the legal targets: `NoShow` is recorded through other
    /// surfaces and gets no card button.
    #[must_use]
    pub const fn card_actions(self) -> &'static [Self] {
        match self {
            Self::Pending | Self::Assigned => &[Self::Confirmed, Self::Rejected],
            Self::Confirmed => &[Self::InProgress, Self::Cancelled],
            Self::InProgress => &[Self::Completed],
            Self::Completed | Self::Cancelled | Self::NoShow | Self::Rejected => &[],
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AssignmentStatus {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "PENDING" => Ok(Self::Pending),
            "ASSIGNED" => Ok(Self::Assigned),
            "CONFIRMED" => Ok(Self::Confirmed),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            "NO_SHOW" => Ok(Self::NoShow),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AssignmentStatus::Pending, "PENDING")]
    #[case(AssignmentStatus::InProgress, "IN_PROGRESS")]
    #[case(AssignmentStatus::NoShow, "NO_SHOW")]
    fn wire_round_trip(#[case] status: AssignmentStatus, #[case] wire: &str) {
        assert_eq!(status.as_str(), wire);
        assert_eq!(AssignmentStatus::try_from(wire), Ok(status));
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        assert_eq!(
            AssignmentStatus::try_from("  pending "),
            Ok(AssignmentStatus::Pending)
        );
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(
            AssignmentStatus::try_from("ARCHIVED"),
            Err(ParseStatusError("ARCHIVED".to_owned()))
        );
    }

    #[test]
    fn assigned_canonicalizes_to_pending() {
        assert_eq!(
            AssignmentStatus::Assigned.canonical_entry(),
            AssignmentStatus::Pending
        );
        assert_eq!(
            AssignmentStatus::Confirmed.canonical_entry(),
            AssignmentStatus::Confirmed
        );
    }

    #[rstest]
    #[case(AssignmentStatus::Pending, false)]
    #[case(AssignmentStatus::Assigned, false)]
    #[case(AssignmentStatus::Confirmed, false)]
    #[case(AssignmentStatus::InProgress, false)]
    #[case(AssignmentStatus::Completed, true)]
    #[case(AssignmentStatus::Cancelled, true)]
    #[case(AssignmentStatus::NoShow, true)]
    #[case(AssignmentStatus::Rejected, true)]
    fn terminality(#[case] status: AssignmentStatus, #[case] terminal: bool) {
        assert_eq!(status.is_terminal(), terminal);
    }

    #[test]
    fn terminal_statuses_allow_no_transitions() {
        for status in AssignmentStatus::ALL {
            if !status.is_terminal() {
                continue;
            }
            for target in AssignmentStatus::ALL {
                assert!(
                    !status.can_transition_to(target),
                    "{status} must not transition to {target}"
                );
            }
        }
    }

    #[rstest]
    #[case(AssignmentStatus::NoShow, false)]
    #[case(AssignmentStatus::Cancelled, true)]
    #[case(AssignmentStatus::Completed, true)]
    #[case(AssignmentStatus::Confirmed, true)]
    fn confirmation_requirements(#[case] target: AssignmentStatus, #[case] prompts: bool) {
        assert_eq!(target.requires_confirmation(), prompts);
    }

    #[test]
    fn rejected_shares_the_cancelled_colour() {
        assert_eq!(
            AssignmentStatus::Rejected.color(),
            AssignmentStatus::Cancelled.color()
        );
    }
}
