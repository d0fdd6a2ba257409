//! Driver fee policy records
//!
//! A driver fee policy fixes the amount paid to a driver per completed
//! delivery, over an inclusive effective-date range.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use settlement_kernel::{DriverFeePolicyId, EffectivePeriod};

use crate::error::ValidationError;
use crate::validation::{require_non_negative, require_ordered_range};

/// A persisted driver fee policy
///
/// The identity and creation timestamp are assigned by storage at insert
/// time and never change afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverFeePolicy {
    /// Storage-assigned surrogate identity
    pub id: DriverFeePolicyId,
    /// Amount paid to the driver per delivery
    pub delivery_fee: Decimal,
    /// First date on which this fee applies (inclusive)
    pub effective_from: NaiveDate,
    /// Last date on which this fee applies (inclusive)
    pub effective_to: NaiveDate,
    /// When the record was created; set once by storage, immutable
    pub created_at: DateTime<Utc>,
}

impl DriverFeePolicy {
    /// Returns the validity range of this policy
    pub fn effective_period(&self) -> EffectivePeriod {
        EffectivePeriod {
            from: self.effective_from,
            to: self.effective_to,
        }
    }

    /// Returns true if this policy applies on the given date
    pub fn is_effective_on(&self, date: NaiveDate) -> bool {
        self.effective_period().contains(date)
    }
}

/// Caller-supplied fields for creating a driver fee policy
///
/// Identity and creation timestamp are deliberately absent; storage
/// assigns both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDriverFeePolicy {
    pub delivery_fee: Decimal,
    pub effective_from: NaiveDate,
    pub effective_to: NaiveDate,
}

impl NewDriverFeePolicy {
    /// Creates a new draft
    pub fn new(delivery_fee: Decimal, effective_from: NaiveDate, effective_to: NaiveDate) -> Self {
        Self {
            delivery_fee,
            effective_from,
            effective_to,
        }
    }

    /// Checks the creation constraints
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_negative("delivery_fee", self.delivery_fee)?;
        require_ordered_range(self.effective_from, self.effective_to)?;
        Ok(())
    }
}
