//! Platform fee policy records
//!
//! A platform fee policy fixes the fees the platform charges hospitals over
//! an inclusive effective-date range: a recurring monthly fee for subscribers,
//! a per-delivery fee for non-subscribers, and a per-unit-per-day storage fee.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use settlement_kernel::{EffectivePeriod, PlatformFeePolicyId};

use crate::error::ValidationError;
use crate::validation::{require_non_negative, require_ordered_range};

/// A persisted platform fee policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFeePolicy {
    /// Storage-assigned surrogate identity
    pub id: PlatformFeePolicyId,
    /// Recurring fee charged to subscribing hospitals per month
    pub subscription_monthly_fee: Decimal,
    /// Per-delivery fee charged to non-subscribing hospitals
    pub non_subscriber_delivery_fee: Decimal,
    /// Storage fee rate per stocked unit per day
    pub storage_fee_per_unit_per_day: Decimal,
    /// First date on which these fees apply (inclusive)
    pub effective_from: NaiveDate,
    /// Last date on which these fees apply (inclusive)
    pub effective_to: NaiveDate,
    /// When the record was created; set once at creation, immutable
    pub created_at: DateTime<Utc>,
}

impl PlatformFeePolicy {
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

/// Caller-supplied fields for creating a platform fee policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlatformFeePolicy {
    pub subscription_monthly_fee: Decimal,
    pub non_subscriber_delivery_fee: Decimal,
    pub storage_fee_per_unit_per_day: Decimal,
    pub effective_from: NaiveDate,
    pub effective_to: NaiveDate,
}

impl NewPlatformFeePolicy {
    /// Checks the creation constraints
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_negative("subscription_monthly_fee", self.subscription_monthly_fee)?;
        require_non_negative(
            "non_subscriber_delivery_fee",
            self.non_subscriber_delivery_fee,
        )?;
        require_non_negative(
            "storage_fee_per_unit_per_day",
            self.storage_fee_per_unit_per_day,
        )?;
        require_ordered_range(self.effective_from, self.effective_to)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft() -> NewPlatformFeePolicy {
        NewPlatformFeePolicy {
            subscription_monthly_fee: dec!(150000),
            non_subscriber_delivery_fee: dec!(5000),
            storage_fee_per_unit_per_day: dec!(120.50),
            effective_from: date(2024, 1, 1),
            effective_to: date(2024, 12, 31),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_each_fee_is_checked() {
        let mut negative_subscription = draft();
        negative_subscription.subscription_monthly_fee = dec!(-1);
        assert!(matches!(
            negative_subscription.validate(),
            Err(ValidationError::NegativeAmount { field: "subscription_monthly_fee", .. })
        ));

        let mut negative_delivery = draft();
        negative_delivery.non_subscriber_delivery_fee = dec!(-1);
        assert!(matches!(
            negative_delivery.validate(),
            Err(ValidationError::NegativeAmount { field: "non_subscriber_delivery_fee", .. })
        ));

        let mut negative_storage = draft();
        negative_storage.storage_fee_per_unit_per_day = dec!(-1);
        assert!(matches!(
            negative_storage.validate(),
            Err(ValidationError::NegativeAmount { field: "storage_fee_per_unit_per_day", .. })
        ));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut inverted = draft();
        inverted.effective_from = date(2025, 1, 1);
        assert!(matches!(
            inverted.validate(),
            Err(ValidationError::InvalidEffectivePeriod { .. })
        ));
    }
}
