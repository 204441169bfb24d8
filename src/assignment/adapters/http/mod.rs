//! HTTP adapters for the assignment context.

mod backend;
mod models;

pub use backend::HttpAssignmentBackend;
pub use models::{
    AssignmentDetailRow, BucketCountsRow, RateValue, TransitionRequestBody,
    TransitionResponseBody, WireError,
};
