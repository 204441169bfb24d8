//! Domain model for the assignment lifecycle.
//!
//! The assignment domain models the status state machine, the in-memory
//! store of visible summaries, and the pure presentation projections, while
//! keeping all infrastructure concerns outside the domain boundary.

mod detail;
mod error;
mod ids;
mod money;
mod payment;
mod schedule;
mod status;
mod store;
mod summary;
mod view;

pub use detail::{AssignmentDetail, AssignmentDetailData};
pub use error::{AssignmentDomainError, ParseMoneyError, ParseStatusError};
pub use ids::AssignmentId;
pub use money::Money;
pub use payment::PaymentTerms;
pub use schedule::TimeSlot;
pub use status::AssignmentStatus;
pub use store::{AppliedChange, ApplyOutcome, AssignmentStore};
pub use summary::{AssignmentSummary, AssignmentSummaryData};
pub use view::{
    Bucket, BucketCounts, CARD_EXIT_ANIMATION, CardAction, CardView, Dismissal, EmptyState,
    NOTICE_DISMISS_AFTER, Notice, NoticeSeverity, ScreenView, TabView, ViewEffect,
};
