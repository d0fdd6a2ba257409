//! Pre-built test fixtures
//!
//! Consistent, predictable values for dates and amounts used across the
//! settlement test suite.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for date test data
pub struct DateFixtures;

impl DateFixtures {
    /// Standard policy year start (Jan 1, 2024)
    pub fn year_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Standard policy year end (Dec 31, 2024)
    pub fn year_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    /// Mid-year half boundary (Jun 30, 2024)
    pub fn half_year_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    /// A date inside the standard year (Mar 15, 2024)
    pub fn mid_march() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    /// A date before the standard year (Dec 31, 2023)
    pub fn before_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
    }

    /// A date after the standard year (Jan 1, 2025)
    pub fn after_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }
}

/// Fixture for monetary test data
pub struct AmountFixtures;

impl AmountFixtures {
    /// Standard per-delivery driver fee
    pub fn driver_delivery_fee() -> Decimal {
        dec!(3000)
    }

    /// Standard hospital subscription fee per month
    pub fn subscription_monthly_fee() -> Decimal {
        dec!(150000)
    }

    /// Standard per-delivery fee for non-subscribers
    pub fn non_subscriber_delivery_fee() -> Decimal {
        dec!(5000)
    }

    /// Standard storage rate per unit per day
    pub fn storage_fee_per_unit_per_day() -> Decimal {
        dec!(120.50)
    }

    /// Standard product sales price
    pub fn sales_price() -> Decimal {
        dec!(10000)
    }

    /// Standard platform fee rate (10%)
    pub fn platform_fee_rate() -> Decimal {
        dec!(0.1)
    }
}
