//! Test data builders
//!
//! Builder patterns for constructing policy drafts with sensible defaults.
//! Tests specify only the relevant fields and take defaults for the rest.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use domain_settlement::driver_fee::NewDriverFeePolicy;
use domain_settlement::platform_fee::NewPlatformFeePolicy;
use domain_settlement::price_policy::{FeePolicyType, NewSettlementPricePolicy};

use crate::fixtures::{AmountFixtures, DateFixtures};

/// Builder for driver fee policy drafts
pub struct DriverFeePolicyBuilder {
    delivery_fee: Decimal,
    effective_from: NaiveDate,
    effective_to: NaiveDate,
}

impl Default for DriverFeePolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverFeePolicyBuilder {
    /// Creates a builder covering the standard 2024 policy year
    pub fn new() -> Self {
        Self {
            delivery_fee: AmountFixtures::driver_delivery_fee(),
            effective_from: DateFixtures::year_start(),
            effective_to: DateFixtures::year_end(),
        }
    }

    /// Sets the delivery fee
    pub fn with_delivery_fee(mut self, fee: Decimal) -> Self {
        self.delivery_fee = fee;
        self
    }

    /// Sets the effective range
    pub fn with_effective_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.effective_from = from;
        self.effective_to = to;
        self
    }

    /// Builds the draft
    pub fn build(self) -> NewDriverFeePolicy {
        NewDriverFeePolicy {
            delivery_fee: self.delivery_fee,
            effective_from: self.effective_from,
            effective_to: self.effective_to,
        }
    }
}

/// Builder for platform fee policy drafts
pub struct PlatformFeePolicyBuilder {
    subscription_monthly_fee: Decimal,
    non_subscriber_delivery_fee: Decimal,
    storage_fee_per_unit_per_day: Decimal,
    effective_from: NaiveDate,
    effective_to: NaiveDate,
}

impl Default for PlatformFeePolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformFeePolicyBuilder {
    /// Creates a builder covering the standard 2024 policy year
    pub fn new() -> Self {
        Self {
            subscription_monthly_fee: AmountFixtures::subscription_monthly_fee(),
            non_subscriber_delivery_fee: AmountFixtures::non_subscriber_delivery_fee(),
            storage_fee_per_unit_per_day: AmountFixtures::storage_fee_per_unit_per_day(),
            effective_from: DateFixtures::year_start(),
            effective_to: DateFixtures::year_end(),
        }
    }

    /// Sets the monthly subscription fee
    pub fn with_subscription_monthly_fee(mut self, fee: Decimal) -> Self {
        self.subscription_monthly_fee = fee;
        self
    }

    /// Sets the non-subscriber delivery fee
    pub fn with_non_subscriber_delivery_fee(mut self, fee: Decimal) -> Self {
        self.non_subscriber_delivery_fee = fee;
        self
    }

    /// Sets the storage fee rate
    pub fn with_storage_fee_per_unit_per_day(mut self, fee: Decimal) -> Self {
        self.storage_fee_per_unit_per_day = fee;
        self
    }

    /// Sets the effective range
    pub fn with_effective_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.effective_from = from;
        self.effective_to = to;
        self
    }

    /// Builds the draft
    pub fn build(self) -> NewPlatformFeePolicy {
        NewPlatformFeePolicy {
            subscription_monthly_fee: self.subscription_monthly_fee,
            non_subscriber_delivery_fee: self.non_subscriber_delivery_fee,
            storage_fee_per_unit_per_day: self.storage_fee_per_unit_per_day,
            effective_from: self.effective_from,
            effective_to: self.effective_to,
        }
    }
}

/// Builder for settlement price policy drafts
pub struct SettlementPricePolicyBuilder {
    product_id: String,
    vendor_id: String,
    sales_price: Decimal,
    platform_fee_rate: Decimal,
    fee_policy_type: Option<FeePolicyType>,
    effective_from: NaiveDate,
    effective_to: NaiveDate,
}

impl Default for SettlementPricePolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SettlementPricePolicyBuilder {
    /// Creates a builder for product P1 of vendor V1 over the first half of 2024
    pub fn new() -> Self {
        Self {
            product_id: "P1".to_string(),
            vendor_id: "V1".to_string(),
            sales_price: AmountFixtures::sales_price(),
            platform_fee_rate: AmountFixtures::platform_fee_rate(),
            fee_policy_type: Some(FeePolicyType::Fixed),
            effective_from: DateFixtures::year_start(),
            effective_to: DateFixtures::half_year_end(),
        }
    }

    /// Sets the product reference
    pub fn with_product_id(mut self, id: impl Into<String>) -> Self {
        self.product_id = id.into();
        self
    }

    /// Sets the vendor reference
    pub fn with_vendor_id(mut self, id: impl Into<String>) -> Self {
        self.vendor_id = id.into();
        self
    }

    /// Sets the sales price
    pub fn with_sales_price(mut self, price: Decimal) -> Self {
        self.sales_price = price;
        self
    }

    /// Sets the platform fee rate
    pub fn with_platform_fee_rate(mut self, rate: Decimal) -> Self {
        self.platform_fee_rate = rate;
        self
    }

    /// Sets or clears the fee policy type
    pub fn with_fee_policy_type(mut self, policy_type: Option<FeePolicyType>) -> Self {
        self.fee_policy_type = policy_type;
        self
    }

    /// Sets the effective range
    pub fn with_effective_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.effective_from = from;
        self.effective_to = to;
        self
    }

    /// Builds the draft
    pub fn build(self) -> NewSettlementPricePolicy {
        NewSettlementPricePolicy {
            product_id: self.product_id,
            vendor_id: self.vendor_id,
            sales_price: self.sales_price,
            platform_fee_rate: self.platform_fee_rate,
            fee_policy_type: self.fee_policy_type,
            effective_from: self.effective_from,
            effective_to: self.effective_to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_drafts_validate() {
        assert!(DriverFeePolicyBuilder::new().build().validate().is_ok());
        assert!(PlatformFeePolicyBuilder::new().build().validate().is_ok());
        assert!(SettlementPricePolicyBuilder::new().build().validate().is_ok());
    }

    #[test]
    fn test_builder_overrides_apply() {
        let draft = DriverFeePolicyBuilder::new()
            .with_delivery_fee(dec!(4500))
            .build();
        assert_eq!(draft.delivery_fee, dec!(4500));
    }
}
