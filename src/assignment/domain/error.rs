//! Error types for assignment domain validation and parsing.

use super::Money;
use thiserror::Error;

/// Errors returned while constructing domain assignment values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssignmentDomainError {
    /// The hourly rate must be strictly positive.
    #[error("hourly rate must be positive, got {0}")]
    NonPositiveRate(Money),

    /// A monetary value could not be parsed.
    #[error(transparent)]
    Money(#[from] ParseMoneyError),
}

/// Error returned while parsing wire-format status values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown assignment status: {0}")]
pub struct ParseStatusError(pub String);

/// Error returned while parsing monetary amounts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid monetary amount '{0}', expected a decimal with at most two fraction digits")]
pub struct ParseMoneyError(pub String);
