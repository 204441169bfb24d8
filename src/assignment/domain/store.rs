//! In-memory store of the currently visible assignment summaries.

use super::{AssignmentId, AssignmentStatus, AssignmentSummary, Bucket, BucketCounts};
use std::collections::{BTreeMap, HashMap};

/// Change applied to one store entry after a successful transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedChange {
    /// The entry stays visible with a new status.
    Status(AssignmentStatus),
    /// The entry left the visible scope.
    Removed,
}

/// Outcome of applying a change to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The entry was updated or removed.
    Applied,
    /// No entry with the id is loaded; nothing changed.
    NotPresent,
}

/// Mapping from assignment id to its last-known summary, scoped to the
/// currently loaded view.
///
/// The store is the single source of truth the presentation surfaces read
/// from; it holds no timers, performs no I/O, and is mutated only through
/// [`AssignmentStore::load`] and [`AssignmentStore::apply`]. Exclusive
/// mutable access stands in for locking: the surrounding services run on one
/// logical thread.
#[derive(Debug, Clone, Default)]
pub struct AssignmentStore {
    entries: HashMap<AssignmentId, AssignmentSummary>,
}

impl AssignmentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the scoped set wholesale.
    ///
    /// Entry statuses are canonicalized on ingest (`Assigned` folds into
    /// `Pending`). When the input repeats an id the last summary wins,
    /// keeping at most one entry per id.
    pub fn load<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = AssignmentSummary>,
    {
        self.entries.clear();
        for mut summary in items {
            summary.set_status(summary.status().canonical_entry());
            self.entries.insert(summary.id(), summary);
        }
    }

    /// Applies a post-transition change: update the status in place or
    /// remove the entry.
    ///
    /// The sole mutation path after a successful transition. Returns
    /// [`ApplyOutcome::NotPresent`] without changing anything when the id is
    /// not loaded.
    pub fn apply(&mut self, id: AssignmentId, change: AppliedChange) -> ApplyOutcome {
        match change {
            AppliedChange::Status(status) => self.entries.get_mut(&id).map_or(
                ApplyOutcome::NotPresent,
                |summary| {
                    summary.set_status(status.canonical_entry());
                    ApplyOutcome::Applied
                },
            ),
            AppliedChange::Removed => self
                .entries
                .remove(&id)
                .map_or(ApplyOutcome::NotPresent, |_| ApplyOutcome::Applied),
        }
    }

    /// Returns the summary for an id, when loaded.
    #[must_use]
    pub fn get(&self, id: AssignmentId) -> Option<&AssignmentSummary> {
        self.entries.get(&id)
    }

    /// Returns whether an id is loaded.
    #[must_use]
    pub fn contains(&self, id: AssignmentId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Returns the number of loaded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts entries per status by scanning the current contents.
    ///
    /// Always a live scan; there is no separately maintained counter that
    /// could drift from the entries.
    #[must_use]
    pub fn counts_by_status(&self) -> BTreeMap<AssignmentStatus, usize> {
        let mut counts = BTreeMap::new();
        for summary in self.entries.values() {
            *counts.entry(summary.status()).or_insert(0) += 1;
        }
        counts
    }

    /// Counts entries per display bucket by scanning the current contents.
    #[must_use]
    pub fn bucket_counts(&self) -> BucketCounts {
        BucketCounts::tally(self.entries.values().map(AssignmentSummary::status))
    }

    /// Returns a bucket's members ordered by start time, then id.
    #[must_use]
    pub fn bucket_members(&self, bucket: Bucket) -> Vec<&AssignmentSummary> {
        let mut members: Vec<&AssignmentSummary> = self
            .entries
            .values()
            .filter(|summary| Bucket::of(summary.status()) == Some(bucket))
            .collect();
        members.sort_by_key(|summary| (summary.slot().start(), summary.id()));
        members
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::domain::{AssignmentSummaryData, Money, TimeSlot};
    use chrono::{TimeZone, Utc};

    fn summary_on_day(id: i64, status: AssignmentStatus, day: u32) -> AssignmentSummary {
        let start = Utc
            .with_ymd_and_hms(2026, 1, day, 9, 0, 0)
            .single()
            .expect("valid start");
        AssignmentSummary::new(AssignmentSummaryData {
            id: AssignmentId::new(id),
            status,
            slot: TimeSlot::new(start, start + chrono::Duration::hours(1)),
            location: "12 Main St".to_owned(),
            city: "Springfield".to_owned(),
            source_language: "English".to_owned(),
            target_language: "French".to_owned(),
            service_type: "Medical".to_owned(),
            hourly_rate: Money::from_cents(5000),
        })
    }

    fn summary(id: i64, status: AssignmentStatus) -> AssignmentSummary {
        summary_on_day(id, status, 5)
    }

    #[test]
    fn load_replaces_wholesale_and_canonicalizes() {
        let mut store = AssignmentStore::new();
        store.load([summary(1, AssignmentStatus::Pending)]);
        store.load([
            summary(2, AssignmentStatus::Assigned),
            summary(3, AssignmentStatus::Confirmed),
        ]);

        assert!(!store.contains(AssignmentId::new(1)));
        assert_eq!(
            store.get(AssignmentId::new(2)).map(AssignmentSummary::status),
            Some(AssignmentStatus::Pending)
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn duplicate_ids_keep_one_entry() {
        let mut store = AssignmentStore::new();
        store.load([
            summary(5, AssignmentStatus::Pending),
            summary(5, AssignmentStatus::Confirmed),
        ]);

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(AssignmentId::new(5)).map(AssignmentSummary::status),
            Some(AssignmentStatus::Confirmed)
        );
    }

    #[test]
    fn apply_updates_status_in_place() {
        let mut store = AssignmentStore::new();
        store.load([summary(1, AssignmentStatus::Pending)]);

        let outcome = store.apply(
            AssignmentId::new(1),
            AppliedChange::Status(AssignmentStatus::Confirmed),
        );

        assert_eq!(outcome, ApplyOutcome::Applied);
        assert_eq!(
            store.get(AssignmentId::new(1)).map(AssignmentSummary::status),
            Some(AssignmentStatus::Confirmed)
        );
    }

    #[test]
    fn apply_removal_drops_the_entry() {
        let mut store = AssignmentStore::new();
        store.load([summary(1, AssignmentStatus::Pending)]);

        let outcome = store.apply(AssignmentId::new(1), AppliedChange::Removed);

        assert_eq!(outcome, ApplyOutcome::Applied);
        assert!(store.is_empty());
    }

    #[test]
    fn apply_to_an_absent_id_changes_nothing() {
        let mut store = AssignmentStore::new();
        store.load([summary(1, AssignmentStatus::Pending)]);

        let outcome = store.apply(
            AssignmentId::new(99),
            AppliedChange::Status(AssignmentStatus::Confirmed),
        );

        assert_eq!(outcome, ApplyOutcome::NotPresent);
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(AssignmentId::new(1)).map(AssignmentSummary::status),
            Some(AssignmentStatus::Pending)
        );
    }

    #[test]
    fn counts_always_match_a_live_recount() {
        let mut store = AssignmentStore::new();
        store.load([
            summary(1, AssignmentStatus::Pending),
            summary(2, AssignmentStatus::Pending),
            summary(3, AssignmentStatus::Confirmed),
        ]);
        store.apply(
            AssignmentId::new(1),
            AppliedChange::Status(AssignmentStatus::Confirmed),
        );
        store.apply(AssignmentId::new(2), AppliedChange::Removed);

        let by_status = store.counts_by_status();
        assert_eq!(by_status.get(&AssignmentStatus::Confirmed), Some(&2));
        assert_eq!(by_status.get(&AssignmentStatus::Pending), None);
        assert_eq!(store.bucket_counts(), BucketCounts::new(0, 2, 0, 0));
    }

    #[test]
    fn bucket_members_are_ordered_by_start_then_id() {
        let mut store = AssignmentStore::new();
        store.load([
            summary_on_day(2, AssignmentStatus::Pending, 5),
            summary_on_day(9, AssignmentStatus::Pending, 4),
            summary_on_day(1, AssignmentStatus::Pending, 5),
        ]);

        let members: Vec<i64> = store
            .bucket_members(Bucket::Pending)
            .iter()
            .map(|member| member.id().value())
            .collect();
        assert_eq!(members, vec![9, 1, 2]);
    }
}
