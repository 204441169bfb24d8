//! Services orchestrating assignment transitions and view state.

mod detail;
mod transition;
mod view_sync;

pub use detail::{DetailService, ModalFetch, ModalView};
pub use transition::{TransitionOutcome, TransitionService};
pub use view_sync::{ViewSyncError, ViewSyncService};
