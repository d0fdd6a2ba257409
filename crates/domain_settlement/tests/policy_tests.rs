//! Comprehensive tests for domain_settlement

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use settlement_kernel::{DriverFeePolicyId, PlatformFeePolicyId, PricePolicyId, StoreError};

use domain_settlement::driver_fee::{DriverFeePolicy, NewDriverFeePolicy};
use domain_settlement::error::ValidationError;
use domain_settlement::platform_fee::{NewPlatformFeePolicy, PlatformFeePolicy};
use domain_settlement::price_policy::{
    FeePolicyType, NewSettlementPricePolicy, SettlementPricePolicy,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Driver Fee Policy Tests
// ============================================================================

mod driver_fee_tests {
    use super::*;

    #[test]
    fn test_draft_with_ordered_range_is_valid() {
        let draft = NewDriverFeePolicy::new(dec!(3000), date(2024, 1, 1), date(2024, 12, 31));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let draft = NewDriverFeePolicy::new(dec!(3000), date(2024, 3, 15), date(2024, 3, 15));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_zero_fee_is_valid() {
        let draft = NewDriverFeePolicy::new(dec!(0), date(2024, 1, 1), date(2024, 12, 31));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_validation_error_converts_to_store_error_with_field() {
        let draft = NewDriverFeePolicy::new(dec!(-1), date(2024, 1, 1), date(2024, 12, 31));
        let error: StoreError = draft.validate().unwrap_err().into();

        assert!(error.is_validation());
        match error {
            StoreError::Validation { field, .. } => {
                assert_eq!(field.as_deref(), Some("delivery_fee"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_effective_period_round_trip() {
        let policy = DriverFeePolicy {
            id: DriverFeePolicyId::new(1),
            delivery_fee: dec!(3000),
            effective_from: date(2024, 1, 1),
            effective_to: date(2024, 12, 31),
            created_at: Utc::now(),
        };

        let period = policy.effective_period();
        assert_eq!(period.from, date(2024, 1, 1));
        assert_eq!(period.to, date(2024, 12, 31));
    }
}

// ============================================================================
// Platform Fee Policy Tests
// ============================================================================

mod platform_fee_tests {
    use super::*;

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
    fn test_complete_draft_is_valid() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_inverted_range_names_effective_from() {
        let mut inverted = draft();
        inverted.effective_from = date(2025, 6, 1);

        let error = inverted.validate().unwrap_err();
        assert_eq!(error.field(), Some("effective_from"));
    }

    #[test]
    fn test_is_effective_on_outside_range() {
        let policy = PlatformFeePolicy {
            id: PlatformFeePolicyId::new(4),
            subscription_monthly_fee: dec!(150000),
            non_subscriber_delivery_fee: dec!(5000),
            storage_fee_per_unit_per_day: dec!(120.50),
            effective_from: date(2024, 1, 1),
            effective_to: date(2024, 6, 30),
            created_at: Utc::now(),
        };

        assert!(policy.is_effective_on(date(2024, 6, 30)));
        assert!(!policy.is_effective_on(date(2024, 7, 1)));
    }
}

// ============================================================================
// Settlement Price Policy Tests
// ============================================================================

mod price_policy_tests {
    use super::*;

    fn draft() -> NewSettlementPricePolicy {
        NewSettlementPricePolicy {
            product_id: "P1".to_string(),
            vendor_id: "V1".to_string(),
            sales_price: dec!(10000),
            platform_fee_rate: dec!(0.1),
            fee_policy_type: Some(FeePolicyType::Fixed),
            effective_from: date(2024, 1, 1),
            effective_to: date(2024, 6, 30),
        }
    }

    #[test]
    fn test_complete_draft_is_valid() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_unclassified_fee_policy_type_is_allowed() {
        let mut unclassified = draft();
        unclassified.fee_policy_type = None;
        assert!(unclassified.validate().is_ok());
    }

    #[test]
    fn test_missing_references_rejected() {
        let mut blank = draft();
        blank.product_id = String::new();
        assert_eq!(
            blank.validate(),
            Err(ValidationError::EmptyField { field: "product_id" })
        );
    }

    #[test]
    fn test_draft_has_no_vendor_revenue_rate_field() {
        // The draft serializes exactly the caller-writable columns; the
        // storage-derived rate must not appear.
        let json = serde_json::to_value(draft()).unwrap();
        assert!(json.get("vendor_revenue_rate").is_none());
        assert!(json.get("created_at").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_record_serde_round_trip() {
        let policy = SettlementPricePolicy {
            id: PricePolicyId::new(11),
            product_id: "P1".to_string(),
            vendor_id: "V1".to_string(),
            sales_price: dec!(10000),
            platform_fee_rate: dec!(0.1),
            vendor_revenue_rate: dec!(0.9),
            fee_policy_type: Some(FeePolicyType::Rate),
            effective_from: date(2024, 1, 1),
            effective_to: date(2024, 6, 30),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&policy).unwrap();
        assert!(json.contains("\"RATE\""));

        let back: SettlementPricePolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, policy);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn decimal_amount() -> impl Strategy<Value = Decimal> {
        // Two decimal places, up to ten million
        (0i64..1_000_000_000).prop_map(|minor| Decimal::new(minor, 2))
    }

    proptest! {
        #[test]
        fn non_negative_fees_with_ordered_ranges_validate(
            fee in decimal_amount(),
            start in 0i64..10_000,
            len in 0i64..3_650
        ) {
            let from = date(2000, 1, 1) + chrono::Duration::days(start);
            let to = from + chrono::Duration::days(len);
            let draft = NewDriverFeePolicy::new(fee, from, to);
            prop_assert!(draft.validate().is_ok());
        }

        #[test]
        fn negative_fees_never_validate(
            minor in 1i64..1_000_000_000,
            start in 0i64..10_000
        ) {
            let fee = Decimal::new(-minor, 2);
            let from = date(2000, 1, 1) + chrono::Duration::days(start);
            let draft = NewDriverFeePolicy::new(fee, from, from);
            prop_assert!(draft.validate().is_err());
        }

        #[test]
        fn inverted_ranges_never_validate(
            fee in decimal_amount(),
            start in 0i64..10_000,
            len in 1i64..3_650
        ) {
            let to = date(2000, 1, 1) + chrono::Duration::days(start);
            let from = to + chrono::Duration::days(len);
            let draft = NewDriverFeePolicy::new(fee, from, to);
            prop_assert!(draft.validate().is_err());
        }
    }
}
