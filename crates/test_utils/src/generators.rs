//! Property-based test generators
//!
//! Proptest strategies for generating policy test data that maintains, or
//! deliberately violates, the domain invariants.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_settlement::price_policy::FeePolicyType;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

/// Strategy for generating non-negative monetary amounts (two decimal places)
pub fn non_negative_amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for generating strictly negative monetary amounts
pub fn negative_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000).prop_map(|minor| Decimal::new(-minor, 2))
}

/// Strategy for generating fee rates in [0, 1] with four decimal places
pub fn fee_rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000).prop_map(|basis| Decimal::new(basis, 4))
}

/// Strategy for generating dates within a few decades of 2000
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..20_000).prop_map(|offset| epoch() + chrono::Duration::days(offset))
}

/// Strategy for generating ordered date pairs (`from <= to`)
pub fn ordered_date_pair_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (0i64..20_000, 0i64..5_000).prop_map(|(start, len)| {
        let from = epoch() + chrono::Duration::days(start);
        (from, from + chrono::Duration::days(len))
    })
}

/// Strategy for generating inverted date pairs (`from > to`)
pub fn inverted_date_pair_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (0i64..20_000, 1i64..5_000).prop_map(|(start, len)| {
        let to = epoch() + chrono::Duration::days(start);
        (to + chrono::Duration::days(len), to)
    })
}

/// Strategy for generating optional fee policy types
pub fn fee_policy_type_strategy() -> impl Strategy<Value = Option<FeePolicyType>> {
    prop_oneof![
        Just(None),
        Just(Some(FeePolicyType::Fixed)),
        Just(Some(FeePolicyType::Rate)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_settlement::price_policy::NewSettlementPricePolicy;

    proptest! {
        #[test]
        fn ordered_pairs_are_ordered((from, to) in ordered_date_pair_strategy()) {
            prop_assert!(from <= to);
        }

        #[test]
        fn inverted_pairs_are_inverted((from, to) in inverted_date_pair_strategy()) {
            prop_assert!(from > to);
        }

        #[test]
        fn generated_drafts_always_validate(
            price in non_negative_amount_strategy(),
            rate in fee_rate_strategy(),
            policy_type in fee_policy_type_strategy(),
            (from, to) in ordered_date_pair_strategy()
        ) {
            let draft = NewSettlementPricePolicy {
                product_id: "P1".to_string(),
                vendor_id: "V1".to_string(),
                sales_price: price,
                platform_fee_rate: rate,
                fee_policy_type: policy_type,
                effective_from: from,
                effective_to: to,
            };
            prop_assert!(draft.validate().is_ok());
        }

        #[test]
        fn negative_amounts_are_negative(amount in negative_amount_strategy()) {
            prop_assert!(amount.is_sign_negative());
        }
    }
}
