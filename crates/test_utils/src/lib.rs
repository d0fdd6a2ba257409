//! Shared test utilities for the settlement workspace
//!
//! Provides builder-pattern draft construction, pre-built fixtures, and
//! proptest strategies so tests specify only the fields they care about.

pub mod builders;
pub mod fixtures;
pub mod generators;
pub mod logging;

pub use builders::{
    DriverFeePolicyBuilder, PlatformFeePolicyBuilder, SettlementPricePolicyBuilder,
};
pub use fixtures::{AmountFixtures, DateFixtures};
pub use logging::init_test_logging;
