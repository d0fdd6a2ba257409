//! Domain validation errors

use chrono::NaiveDate;
use rust_decimal::Decimal;
use settlement_kernel::{StoreError, TemporalError};
use thiserror::Error;

/// Errors raised when a policy draft violates a creation constraint
///
/// The original data source carried no validation; these rules are enforced
/// at the domain boundary so that invalid drafts never reach storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} must not be negative: {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error("effective_from {from} must not be after effective_to {to}")]
    InvalidEffectivePeriod { from: NaiveDate, to: NaiveDate },
}

impl ValidationError {
    /// Names the offending field, where one applies
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::EmptyField { field } => Some(field),
            ValidationError::NegativeAmount { field, .. } => Some(field),
            ValidationError::InvalidEffectivePeriod { .. } => Some("effective_from"),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(error: ValidationError) -> Self {
        match error.field() {
            Some(field) => StoreError::validation_field(error.to_string(), field),
            None => StoreError::validation(error.to_string()),
        }
    }
}

impl From<TemporalError> for ValidationError {
    fn from(error: TemporalError) -> Self {
        match error {
            TemporalError::InvalidPeriod { from, to } => {
                ValidationError::InvalidEffectivePeriod { from, to }
            }
        }
    }
}
