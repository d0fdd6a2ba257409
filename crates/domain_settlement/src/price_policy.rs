//! Settlement price policy records
//!
//! A settlement price policy fixes, per catalog product, the sales price and
//! how revenue splits between the platform and the consigning vendor. The
//! vendor's share is derived by storage from the platform fee rate; the
//! application never writes it.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use settlement_kernel::{EffectivePeriod, PricePolicyId};

use crate::error::ValidationError;
use crate::validation::{require_non_empty, require_non_negative, require_ordered_range};

/// How the platform fee for a product is determined
///
/// Stored by symbolic name, never by ordinal, so that reordering variants
/// cannot corrupt persisted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeePolicyType {
    /// A fixed fee per settled sale
    Fixed,
    /// A rate applied to the sales price
    Rate,
}

impl FeePolicyType {
    /// Returns the symbolic name used for storage
    pub fn as_str(&self) -> &'static str {
        match self {
            FeePolicyType::Fixed => "FIXED",
            FeePolicyType::Rate => "RATE",
        }
    }
}

impl fmt::Display for FeePolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a stored symbolic name matches no known variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown fee policy type: {0}")]
pub struct UnknownFeePolicyType(pub String);

impl FromStr for FeePolicyType {
    type Err = UnknownFeePolicyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIXED" => Ok(FeePolicyType::Fixed),
            "RATE" => Ok(FeePolicyType::Rate),
            other => Err(UnknownFeePolicyType(other.to_string())),
        }
    }
}

/// A persisted settlement price policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementPricePolicy {
    /// Storage-assigned surrogate identity
    pub id: PricePolicyId,
    /// Catalog item reference (external shop system)
    pub product_id: String,
    /// Consigning vendor reference (external shop system)
    pub vendor_id: String,
    /// Sales price of the product
    pub sales_price: Decimal,
    /// Fraction of the sales price retained by the platform
    pub platform_fee_rate: Decimal,
    /// Fraction of the sales price retained by the vendor
    ///
    /// Computed by storage from the platform fee rate. The write path never
    /// sets this; reads return whatever storage derived.
    pub vendor_revenue_rate: Decimal,
    /// How the platform fee is determined, if classified
    pub fee_policy_type: Option<FeePolicyType>,
    /// First date on which this pricing applies (inclusive)
    pub effective_from: NaiveDate,
    /// Last date on which this pricing applies (inclusive)
    pub effective_to: NaiveDate,
    /// When the record was created; set once by storage, immutable
    pub created_at: DateTime<Utc>,
}

impl SettlementPricePolicy {
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

/// Caller-supplied fields for creating a settlement price policy
///
/// `vendor_revenue_rate` is deliberately absent: storage derives it, and a
/// caller-computed value would not be trusted anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSettlementPricePolicy {
    pub product_id: String,
    pub vendor_id: String,
    pub sales_price: Decimal,
    pub platform_fee_rate: Decimal,
    pub fee_policy_type: Option<FeePolicyType>,
    pub effective_from: NaiveDate,
    pub effective_to: NaiveDate,
}

impl NewSettlementPricePolicy {
    /// Checks the creation constraints
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("product_id", &self.product_id)?;
        require_non_empty("vendor_id", &self.vendor_id)?;
        require_non_negative("sales_price", self.sales_price)?;
        require_non_negative("platform_fee_rate", self.platform_fee_rate)?;
        require_ordered_range(self.effective_from, self.effective_to)?;
        Ok(())
    }
}
