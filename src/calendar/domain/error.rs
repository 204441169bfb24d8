//! Calendar domain errors.

use crate::assignment::domain::{AssignmentDomainError, ParseMoneyError, ParseStatusError};
use thiserror::Error;

/// Errors raised while building calendar events.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalendarDomainError {
    /// The event status string was not recognized.
    #[error(transparent)]
    Status(#[from] ParseStatusError),

    /// The event rate could not be parsed.
    #[error(transparent)]
    Money(#[from] ParseMoneyError),

    /// The event payment terms were invalid.
    #[error(transparent)]
    Payment(#[from] AssignmentDomainError),
}
