//! Effective-period handling for policy records
//!
//! Every policy carries a validity date range `[effective_from, effective_to]`,
//! inclusive on both ends. A policy applies to a settlement date when the date
//! falls inside that range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors related to effective-period operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: from {from} must not be after to {to}")]
    InvalidPeriod { from: NaiveDate, to: NaiveDate },
}

/// An inclusive date range during which a policy applies
///
/// Both bounds are business dates, not timestamps: a policy effective
/// through `2024-12-31` still applies to deliveries on that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectivePeriod {
    /// First date on which the policy applies (inclusive)
    pub from: NaiveDate,
    /// Last date on which the policy applies (inclusive)
    pub to: NaiveDate,
}

impl EffectivePeriod {
    /// Creates a new effective period
    ///
    /// Fails with `TemporalError::InvalidPeriod` when `from > to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, TemporalError> {
        if from > to {
            return Err(TemporalError::InvalidPeriod { from, to });
        }
        Ok(Self { from, to })
    }

    /// Returns true if this period contains the given date (inclusive both ends)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Returns true if this period overlaps with another
    pub fn overlaps(&self, other: &EffectivePeriod) -> bool {
        self.from <= other.to && other.from <= self.to
    }

    /// Number of days covered, counting both endpoints
    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}
