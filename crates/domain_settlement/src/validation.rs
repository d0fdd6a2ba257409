//! Shared draft validation rules
//!
//! # Validation Rules
//!
//! - Effective ranges must satisfy `effective_from <= effective_to`
//! - Monetary amounts and fee rates must be non-negative
//! - External reference identifiers must be non-empty

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Rejects negative monetary amounts and rates
pub fn require_non_negative(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::NegativeAmount { field, value });
    }
    Ok(())
}

/// Rejects empty external reference identifiers
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}

/// Rejects inverted effective-date ranges
pub fn require_ordered_range(from: NaiveDate, to: NaiveDate) -> Result<(), ValidationError> {
    if from > to {
        return Err(ValidationError::InvalidEffectivePeriod { from, to });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_amount_is_accepted() {
        assert!(require_non_negative("delivery_fee", dec!(0)).is_ok());
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let result = require_non_negative("delivery_fee", dec!(-0.01));
        assert_eq!(
            result,
            Err(ValidationError::NegativeAmount {
                field: "delivery_fee",
                value: dec!(-0.01),
            })
        );
    }

    #[test]
    fn test_whitespace_identifier_is_rejected() {
        assert!(require_non_empty("product_id", "  ").is_err());
        assert!(require_non_empty("product_id", "P1").is_ok());
    }
}
